use serde::{Deserialize, Serialize};

/// Placeholder substituted when an optional field cannot be extracted
pub const NOT_SPECIFIED: &str = "Not Specified";

/// One scraped job posting's flattened field set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Job title as shown on the listing card
    pub title: String,

    /// Hiring company
    pub company: String,

    /// Advertised location
    pub location: String,

    /// Experience range, or the sentinel when the card omits it
    pub experience: String,

    /// Absolute URL of the job's detail page
    pub detail_url: String,

    /// Salary text from the detail page, or the sentinel
    pub salary: String,

    /// Key skills from the detail page; a single sentinel entry when absent
    pub skills: Vec<String>,
}

/// Fields extracted from one listing card on a search results page.
///
/// Title, company, location and the detail link are required for the
/// card to become a record; experience is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: Option<String>,
    pub detail_url: String,
}

/// Fields extracted from a job's detail page, each independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub salary: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl JobListing {
    /// Compose a record from a listing card and its detail-page fields,
    /// substituting sentinels for whatever the portal did not provide.
    pub fn from_parts(card: ListingCard, detail: DetailFields) -> Self {
        Self {
            title: card.title,
            company: card.company,
            location: card.location,
            experience: card.experience.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            detail_url: card.detail_url,
            salary: detail.salary.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            skills: detail
                .skills
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| vec![NOT_SPECIFIED.to_string()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ListingCard {
        ListingCard {
            title: "Machine Learning Engineer".to_string(),
            company: "Acme Analytics".to_string(),
            location: "Bangalore".to_string(),
            experience: Some("3-5 Yrs".to_string()),
            detail_url: "https://www.naukri.com/job-listings-mle-1".to_string(),
        }
    }

    #[test]
    fn full_detail_keeps_all_fields() {
        let detail = DetailFields {
            salary: Some("12-18 Lacs PA".to_string()),
            skills: Some(vec!["Python".to_string(), "SQL".to_string()]),
        };
        let rec = JobListing::from_parts(card(), detail);
        assert_eq!(rec.experience, "3-5 Yrs");
        assert_eq!(rec.salary, "12-18 Lacs PA");
        assert_eq!(rec.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn missing_optionals_fall_back_to_sentinels() {
        let mut c = card();
        c.experience = None;
        let rec = JobListing::from_parts(c, DetailFields::default());
        assert_eq!(rec.experience, NOT_SPECIFIED);
        assert_eq!(rec.salary, NOT_SPECIFIED);
        assert_eq!(rec.skills, vec![NOT_SPECIFIED.to_string()]);
    }

    #[test]
    fn empty_skill_list_counts_as_absent() {
        let detail = DetailFields {
            salary: None,
            skills: Some(Vec::new()),
        };
        let rec = JobListing::from_parts(card(), detail);
        assert_eq!(rec.skills, vec![NOT_SPECIFIED.to_string()]);
    }
}
