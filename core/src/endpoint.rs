//! Endpoint catalog and the request trait tying parameters to responses.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// One CUFinder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Cuf,
    Lcuf,
    Dtc,
    Dte,
    Ntp,
    Rel,
    Fcl,
    Elf,
    Car,
    Fcc,
    Fts,
    Epp,
    Fwe,
    Tep,
    Enc,
    Cec,
    Clo,
    Cse,
    Pse,
    Lbs,
    Bcd,
    Ccp,
    Isc,
    Cbc,
    Csc,
}

impl Endpoint {
    pub const ALL: [Endpoint; 25] = [
        Endpoint::Cuf,
        Endpoint::Lcuf,
        Endpoint::Dtc,
        Endpoint::Dte,
        Endpoint::Ntp,
        Endpoint::Rel,
        Endpoint::Fcl,
        Endpoint::Elf,
        Endpoint::Car,
        Endpoint::Fcc,
        Endpoint::Fts,
        Endpoint::Epp,
        Endpoint::Fwe,
        Endpoint::Tep,
        Endpoint::Enc,
        Endpoint::Cec,
        Endpoint::Clo,
        Endpoint::Cse,
        Endpoint::Pse,
        Endpoint::Lbs,
        Endpoint::Bcd,
        Endpoint::Ccp,
        Endpoint::Isc,
        Endpoint::Cbc,
        Endpoint::Csc,
    ];

    /// Upper-case code used to tag errors, e.g. `"CUF"`.
    pub fn code(self) -> &'static str {
        match self {
            Endpoint::Cuf => "CUF",
            Endpoint::Lcuf => "LCUF",
            Endpoint::Dtc => "DTC",
            Endpoint::Dte => "DTE",
            Endpoint::Ntp => "NTP",
            Endpoint::Rel => "REL",
            Endpoint::Fcl => "FCL",
            Endpoint::Elf => "ELF",
            Endpoint::Car => "CAR",
            Endpoint::Fcc => "FCC",
            Endpoint::Fts => "FTS",
            Endpoint::Epp => "EPP",
            Endpoint::Fwe => "FWE",
            Endpoint::Tep => "TEP",
            Endpoint::Enc => "ENC",
            Endpoint::Cec => "CEC",
            Endpoint::Clo => "CLO",
            Endpoint::Cse => "CSE",
            Endpoint::Pse => "PSE",
            Endpoint::Lbs => "LBS",
            Endpoint::Bcd => "BCD",
            Endpoint::Ccp => "CCP",
            Endpoint::Isc => "ISC",
            Endpoint::Cbc => "CBC",
            Endpoint::Csc => "CSC",
        }
    }

    /// Path relative to the base URL, e.g. `"/cuf"`.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Cuf => "/cuf",
            Endpoint::Lcuf => "/lcuf",
            Endpoint::Dtc => "/dtc",
            Endpoint::Dte => "/dte",
            Endpoint::Ntp => "/ntp",
            Endpoint::Rel => "/rel",
            Endpoint::Fcl => "/fcl",
            Endpoint::Elf => "/elf",
            Endpoint::Car => "/car",
            Endpoint::Fcc => "/fcc",
            Endpoint::Fts => "/fts",
            Endpoint::Epp => "/epp",
            Endpoint::Fwe => "/fwe",
            Endpoint::Tep => "/tep",
            Endpoint::Enc => "/enc",
            Endpoint::Cec => "/cec",
            Endpoint::Clo => "/clo",
            Endpoint::Cse => "/cse",
            Endpoint::Pse => "/pse",
            Endpoint::Lbs => "/lbs",
            Endpoint::Bcd => "/bcd",
            Endpoint::Ccp => "/ccp",
            Endpoint::Isc => "/isc",
            Endpoint::Cbc => "/cbc",
            Endpoint::Csc => "/csc",
        }
    }

    /// Short summary, recorded on the `cufinder_call` span.
    pub fn description(self) -> &'static str {
        match self {
            Endpoint::Cuf => "company name to domain",
            Endpoint::Lcuf => "company name to LinkedIn URL",
            Endpoint::Dtc => "domain to company name",
            Endpoint::Dte => "company emails",
            Endpoint::Ntp => "company phones",
            Endpoint::Rel => "reverse email lookup",
            Endpoint::Fcl => "company lookalikes",
            Endpoint::Elf => "company fundraising",
            Endpoint::Car => "company revenue",
            Endpoint::Fcc => "company subsidiaries",
            Endpoint::Fts => "company tech stack",
            Endpoint::Epp => "LinkedIn profile enrichment",
            Endpoint::Fwe => "LinkedIn profile work email",
            Endpoint::Tep => "person enrichment",
            Endpoint::Enc => "company enrichment",
            Endpoint::Cec => "company employee countries",
            Endpoint::Clo => "company locations",
            Endpoint::Cse => "company search",
            Endpoint::Pse => "people search",
            Endpoint::Lbs => "local business search",
            Endpoint::Bcd => "B2B customers",
            Endpoint::Ccp => "careers page",
            Endpoint::Isc => "SaaS detection",
            Endpoint::Cbc => "business type",
            Endpoint::Csc => "mission statement",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A parameter record bound to its endpoint and response type.
pub trait EndpointRequest: Serialize {
    const ENDPOINT: Endpoint;
    type Response: DeserializeOwned;

    /// Check required fields in declaration order. Runs before any I/O.
    fn validate(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_twenty_five_distinct_endpoints() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        let codes: HashSet<_> = Endpoint::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(paths.len(), 25);
        assert_eq!(codes.len(), 25);
    }

    #[test]
    fn path_is_lower_case_code() {
        for endpoint in Endpoint::ALL {
            assert_eq!(
                endpoint.path(),
                format!("/{}", endpoint.code().to_ascii_lowercase())
            );
        }
    }

    #[test]
    fn every_endpoint_is_described() {
        let descriptions: HashSet<_> = Endpoint::ALL.iter().map(|e| e.description()).collect();
        assert_eq!(descriptions.len(), Endpoint::ALL.len());
        assert!(descriptions.iter().all(|d| !d.trim().is_empty()));
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(Endpoint::Lcuf.to_string(), "LCUF");
    }
}
