//! Typed response records, one per endpoint.
//!
//! Each record carries the fields common to every response (`query`,
//! `credit_count`, `meta_data`, `confidence_level`) followed by its payload.
//! Missing keys bind to zero values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{
    Company, CompanyLocation, CompanySummary, EnrichedPerson, Fundraising, Person, RelPerson,
};

macro_rules! response {
    ($(#[$meta:meta])* $name:ident { $($(#[$field_meta:meta])* $field:ident: $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Echo of the lookup input; a string or an object depending on the endpoint.
            pub query: Value,
            pub credit_count: i64,
            pub meta_data: Map<String, Value>,
            pub confidence_level: i64,
            $($(#[$field_meta])* pub $field: $ty,)*
        }
    };
}

response!(
    /// Company domain from company name.
    CufResponse { domain: String }
);

response!(
    /// LinkedIn company URL from company name.
    LcufResponse { linkedin_url: String }
);

response!(
    /// Company name from domain.
    DtcResponse { company_name: String }
);

response!(
    /// Company emails from domain.
    DteResponse { emails: Vec<String> }
);

response!(
    /// Company phones from company name.
    NtpResponse { phones: Vec<String> }
);

response!(
    /// Person behind an email address.
    RelResponse { person: RelPerson }
);

response!(
    /// Similar companies.
    FclResponse { companies: Vec<CompanySummary> }
);

response!(
    /// Fundraising data.
    ElfResponse {
        #[serde(rename = "fundraising_info")]
        fundraising: Fundraising,
    }
);

response!(
    /// Annual revenue.
    CarResponse {
        #[serde(rename = "annual_revenue")]
        revenue: String,
    }
);

response!(
    /// Subsidiaries.
    FccResponse { subsidiaries: Vec<String> }
);

response!(
    /// Technologies in use.
    FtsResponse { technologies: Vec<String> }
);

response!(
    /// Enriched LinkedIn profile.
    EppResponse { person: EnrichedPerson }
);

response!(
    /// Work email from LinkedIn profile.
    FweResponse { work_email: String }
);

response!(
    /// Enriched person from name and company.
    TepResponse { person: EnrichedPerson }
);

response!(
    /// Enriched company.
    EncResponse { company: CompanySummary }
);

response!(
    /// Employee distribution by country. The shape varies, so it stays raw JSON.
    CecResponse { countries: Value }
);

response!(
    /// Office locations.
    CloResponse { locations: Vec<CompanyLocation> }
);

response!(
    /// Company search results.
    CseResponse { companies: Vec<Company> }
);

response!(
    /// People search results.
    PseResponse { peoples: Vec<Person> }
);

response!(
    /// Local business search results.
    LbsResponse { companies: Vec<Company> }
);

response!(
    /// B2B customers of a company.
    BcdResponse { customers: Vec<String> }
);

response!(
    /// Careers page of a company.
    CcpResponse { careers_page_url: String }
);

response!(
    /// Whether a company sells software as a service.
    IscResponse { is_saas: String }
);

response!(
    /// Business type (B2B, B2C, ...) of a company.
    CbcResponse { business_type: String }
);

response!(
    /// Mission statement of a company.
    CscResponse { mission_statement: String }
);
