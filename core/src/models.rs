//! Nested company and person records carried inside endpoint responses.
//!
//! Every record tolerates missing keys (`#[serde(default)]`) so partial
//! payloads bind without error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainLocation {
    pub geo: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub continent: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySocial {
    pub facebook: String,
    pub linkedin: String,
    pub twitter: String,
    pub youtube: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyEmployees {
    pub range: String,
    pub count: i64,
}

/// Full company profile returned by the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub domain: String,
    pub linkedin_url: String,
    pub industry: String,
    pub overview: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub size: String,
    pub main_location: MainLocation,
    pub location: String,
    pub description: String,
    pub founded: i64,
    pub revenue: String,
    pub employees: CompanyEmployees,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub social: CompanySocial,
    pub technologies: Vec<String>,
    pub subsidiaries: Vec<String>,
    pub headquarters: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub address: String,
}

/// Condensed company record used by lookalike search and company enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySummary {
    pub name: String,
    pub website: String,
    pub employee_count: i64,
    pub size: String,
    pub industry: String,
    pub description: String,
    pub linkedin_url: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub domain: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub founded_year: String,
    pub logo_url: String,
    pub followers_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fundraising {
    pub funding_last_round_type: String,
    /// Misspelled upstream; kept as sent.
    pub funding_ammount_currency_code: String,
    pub funding_money_raised: String,
    pub funding_last_round_investors_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyLocation {
    pub country: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
    pub line1: String,
    pub line2: String,
    pub latitude: String,
    pub longitude: String,
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTitleCategory {
    pub category: String,
    pub super_category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentJob {
    pub title: String,
    pub role: String,
    pub level: String,
    pub categories: Vec<JobTitleCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connections {
    pub has_work_email: bool,
    pub has_personal_email: bool,
    pub has_phone: bool,
    pub work_email: String,
    pub personal_email: String,
    pub phone: String,
    pub is_accept_all: bool,
    pub is_accept_email: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolLocation {
    pub name: String,
    pub locality: String,
    pub region: String,
    pub country: String,
    pub continent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct School {
    pub name: String,
    #[serde(rename = "type")]
    pub school_type: String,
    pub id: String,
    pub location: SchoolLocation,
    pub linkedin_url: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub linkedin_id: String,
    pub website: String,
    pub domain: String,
    pub job_company_id_mongo: String,
    pub university_id_mongo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: School,
    pub end_date: String,
    pub start_date: String,
    pub gpa: String,
    pub degrees: Vec<String>,
    pub majors: Vec<String>,
    pub minors: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceCompany {
    pub name: String,
    pub linkedin_url: String,
    pub domain: String,
    pub size: String,
    pub industry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceTitle {
    pub name: String,
    pub role: String,
    pub sub_role: String,
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: ExperienceCompany,
    pub location_names: Vec<String>,
    pub end_date: String,
    pub start_date: String,
    pub title: ExperienceTitle,
    pub is_primary: bool,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub certification: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonLocation {
    pub country: String,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonSocial {
    pub linkedin_username: String,
    pub linkedin_connections: i64,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub github: String,
}

/// Full person profile returned by people search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub logo: String,
    pub overview: String,
    /// Free-form; the service does not send a stable shape here.
    pub experience: Value,
    pub connections: Connections,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub educations: Vec<Education>,
    pub experiences: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub company: Company,
    pub location: PersonLocation,
    pub current_job: CurrentJob,
    pub social: PersonSocial,
}

/// Person matched by reverse email lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelPerson {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub linkedin_url: String,
    pub summary: String,
    /// Sent as text by this endpoint, unlike the enrichment endpoints.
    pub linkedin_followers: String,
    pub facebook: String,
    pub twitter: String,
    pub avatar: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub job_title: String,
    pub job_title_categories: Vec<String>,
    pub company_name: String,
    pub company_linkedin: String,
    pub company_website: String,
    pub company_size: String,
    pub company_industry: String,
    pub company_facebook: String,
    pub company_twitter: String,
    pub company_country: String,
    pub company_state: String,
    pub company_city: String,
}

/// Person returned by profile and person enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichedPerson {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub linkedin_url: String,
    pub summary: String,
    pub linkedin_followers: i64,
    pub facebook: String,
    pub twitter: String,
    pub avatar: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub job_title: String,
    pub job_title_categories: Vec<String>,
    pub company_name: String,
    pub company_linkedin: String,
    pub company_website: String,
    pub company_size: String,
    pub company_industry: String,
    pub company_facebook: String,
    pub company_twitter: String,
    pub company_country: String,
    pub company_state: String,
    pub company_city: String,
    pub email: String,
    pub phone: String,
}
