pub mod fasta;
pub mod kmer;
pub mod sequence;
pub mod stats;
pub mod validator;

pub use fasta::{parse_fasta, FastaRecord};
pub use kmer::{extract_kmers, kmer_string};
pub use sequence::Sequence;
pub use stats::{gc_content, nucleotide_frequency, statistics, NucleotideFrequency, SequenceStatistics};
pub use validator::{
    clean_sequence, validate_sequence, ErrorKind, SequenceValidator, ValidationError,
    ValidationOutcome, MIN_SEQUENCE_LENGTH, VALID_NUCLEOTIDES,
};
