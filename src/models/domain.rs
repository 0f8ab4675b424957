use serde::{de, Deserialize, Deserializer, Serialize};

/// Open role submitted for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub description: String,
    pub required_skills: Vec<String>,
    pub required_education: String,
    pub location: String,
    /// Years of experience required
    pub experience: i64,
    /// (min, max); ordering is not checked
    #[serde(deserialize_with = "deserialize_salary_range")]
    pub salary_range: [f64; 2],
}

/// Accepts exactly two numbers. Decoding through a `Vec` keeps a wrong
/// length a data error rather than a JSON syntax error.
fn deserialize_salary_range<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<f64>::deserialize(deserializer)?;
    match values.as_slice() {
        [min, max] => Ok([*min, *max]),
        _ => Err(de::Error::invalid_length(values.len(), &"a pair of numbers [min, max]")),
    }
}

/// Job seeker submitted for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: Vec<String>,
    pub education: String,
    /// Years of experience
    pub experience: i64,
    pub desired_salary: i64,
    pub location: String,
    pub willing_to_relocate: bool,
}
