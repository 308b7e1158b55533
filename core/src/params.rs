//! Parameter records, one per endpoint.
//!
//! Field names are the wire names. Empty strings, zero numbers, `false` and
//! empty lists are left out of the encoded form, so search filters only send
//! what was set.

use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, EndpointRequest};
use crate::error::{CufError, Result};
use crate::responses::*;

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CufError::Validation { field });
    }
    Ok(())
}

/// Lookup record whose fields are all required strings, validated in
/// declaration order.
macro_rules! lookup_params {
    ($(#[$meta:meta])* $name:ident => $endpoint:ident, $response:ty { $($field:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }
        }

        impl EndpointRequest for $name {
            const ENDPOINT: Endpoint = Endpoint::$endpoint;
            type Response = $response;

            fn validate(&self) -> Result<()> {
                $(require(stringify!($field), &self.$field)?;)+
                Ok(())
            }
        }
    };
}

/// Search record with no required fields.
macro_rules! search_request {
    ($name:ident => $endpoint:ident, $response:ty) => {
        impl EndpointRequest for $name {
            const ENDPOINT: Endpoint = Endpoint::$endpoint;
            type Response = $response;

            fn validate(&self) -> Result<()> {
                Ok(())
            }
        }
    };
}

lookup_params!(CufParams => Cuf, CufResponse { company_name, country_code });
lookup_params!(LcufParams => Lcuf, LcufResponse { company_name });
lookup_params!(DtcParams => Dtc, DtcResponse { company_website });
lookup_params!(DteParams => Dte, DteResponse { company_website });
lookup_params!(NtpParams => Ntp, NtpResponse { company_name });
lookup_params!(RelParams => Rel, RelResponse { email });
lookup_params!(FclParams => Fcl, FclResponse { query });
lookup_params!(ElfParams => Elf, ElfResponse { query });
lookup_params!(CarParams => Car, CarResponse { query });
lookup_params!(FccParams => Fcc, FccResponse { query });
lookup_params!(FtsParams => Fts, FtsResponse { query });
lookup_params!(EppParams => Epp, EppResponse { linkedin_url });
lookup_params!(FweParams => Fwe, FweResponse { linkedin_url });
lookup_params!(TepParams => Tep, TepResponse { full_name, company });
lookup_params!(EncParams => Enc, EncResponse { query });
lookup_params!(CecParams => Cec, CecResponse { query });
lookup_params!(CloParams => Clo, CloResponse { query });
lookup_params!(BcdParams => Bcd, BcdResponse { url });
lookup_params!(CcpParams => Ccp, CcpResponse { url });
lookup_params!(IscParams => Isc, IscResponse { url });
lookup_params!(CbcParams => Cbc, CbcResponse { url });
lookup_params!(CscParams => Csc, CscResponse { url });

/// Company search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CseParams {
    pub name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub followers_count_min: u32,
    pub followers_count_max: u32,
    pub industry: String,
    pub employee_size: String,
    pub founded_after_year: u32,
    pub founded_before_year: u32,
    pub funding_amount_max: u64,
    pub funding_amount_min: u64,
    pub products_services: Vec<String>,
    pub is_school: bool,
    pub annual_revenue_min: u64,
    pub annual_revenue_max: u64,
    pub page: u32,
}

/// People search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseParams {
    pub full_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub job_title_role: String,
    pub job_title_level: String,
    pub company_country: String,
    pub company_state: String,
    pub company_city: String,
    pub company_name: String,
    pub company_linkedin_url: String,
    pub company_industry: String,
    pub company_employee_size: String,
    pub company_products_services: Vec<String>,
    pub company_annual_revenue_min: u64,
    pub company_annual_revenue_max: u64,
    pub page: u32,
}

/// Local business search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LbsParams {
    pub name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub industry: String,
    pub page: u32,
}

search_request!(CseParams => Cse, CseResponse);
search_request!(PseParams => Pse, PseResponse);
search_request!(LbsParams => Lbs, LbsResponse);
