use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six risk categories the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disease {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Cancer_Risk")]
    CancerRisk,
    #[serde(rename = "Diabetes_Type2")]
    DiabetesType2,
    #[serde(rename = "Heart_Disease")]
    HeartDisease,
    #[serde(rename = "Alzheimers_Risk")]
    AlzheimersRisk,
    #[serde(rename = "Parkinsons_Risk")]
    ParkinsonsRisk,
}

impl Disease {
    pub const ALL: [Disease; 6] = [
        Disease::Healthy,
        Disease::CancerRisk,
        Disease::DiabetesType2,
        Disease::HeartDisease,
        Disease::AlzheimersRisk,
        Disease::ParkinsonsRisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Disease::Healthy => "Healthy",
            Disease::CancerRisk => "Cancer_Risk",
            Disease::DiabetesType2 => "Diabetes_Type2",
            Disease::HeartDisease => "Heart_Disease",
            Disease::AlzheimersRisk => "Alzheimers_Risk",
            Disease::ParkinsonsRisk => "Parkinsons_Risk",
        }
    }

    /// Nucleotide bias (A, T, C, G) used when synthesizing training data.
    pub fn composition_bias(&self) -> [f64; 4] {
        match self {
            Disease::Healthy => [0.25, 0.25, 0.25, 0.25],
            Disease::CancerRisk => [0.20, 0.20, 0.35, 0.25],
            Disease::DiabetesType2 => [0.30, 0.30, 0.20, 0.20],
            Disease::HeartDisease => [0.22, 0.28, 0.28, 0.22],
            Disease::AlzheimersRisk => [0.20, 0.25, 0.25, 0.30],
            Disease::ParkinsonsRisk => [0.28, 0.22, 0.22, 0.28],
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Disease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown disease category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip_through_from_str() {
        for disease in Disease::ALL {
            assert_eq!(disease.label().parse::<Disease>().unwrap(), disease);
        }
        assert!("Flu".parse::<Disease>().is_err());
    }

    #[test]
    fn test_biases_are_distributions() {
        for disease in Disease::ALL {
            let total: f64 = disease.composition_bias().iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", disease, total);
        }
    }
}
