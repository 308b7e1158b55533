//! Convenience facade with one short method per endpoint.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::params::*;
use crate::responses::*;
use crate::service::Service;
use crate::transport::Transport;

/// Entry point for the CUFinder API.
///
/// ```no_run
/// let client = cufinder_core::Cufinder::new("your-api-key");
/// let result = client.cuf("cufinder", "US")?;
/// println!("{}", result.domain);
/// # Ok::<(), cufinder_core::CufError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cufinder {
    service: Service,
}

impl Cufinder {
    /// Client with the default base URL and timeout, making a single attempt
    /// per call.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(&ClientConfig::new(api_key))
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self::with_transport(Transport::new(config))
    }

    pub fn with_transport(transport: Transport) -> Self {
        Self {
            service: Service::new(transport),
        }
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn transport(&self) -> &Transport {
        self.service.transport()
    }

    // Company lookups

    /// Company domain from company name and ISO country code.
    pub fn cuf(&self, company_name: &str, country_code: &str) -> Result<CufResponse> {
        self.service.get_domain(&CufParams::new(company_name, country_code))
    }

    /// LinkedIn company URL from company name.
    pub fn lcuf(&self, company_name: &str) -> Result<LcufResponse> {
        self.service.get_linkedin_url(&LcufParams::new(company_name))
    }

    /// Company name from its website.
    pub fn dtc(&self, company_website: &str) -> Result<DtcResponse> {
        self.service.get_company_name(&DtcParams::new(company_website))
    }

    /// Company emails from its website.
    pub fn dte(&self, company_website: &str) -> Result<DteResponse> {
        self.service.get_emails(&DteParams::new(company_website))
    }

    /// Company phone numbers from its name.
    pub fn ntp(&self, company_name: &str) -> Result<NtpResponse> {
        self.service.get_phones(&NtpParams::new(company_name))
    }

    // People lookups

    /// Person behind an email address.
    pub fn rel(&self, email: &str) -> Result<RelResponse> {
        self.service.reverse_email_lookup(&RelParams::new(email))
    }

    /// Enriched LinkedIn profile.
    pub fn epp(&self, linkedin_url: &str) -> Result<EppResponse> {
        self.service.enrich_profile(&EppParams::new(linkedin_url))
    }

    /// Work email for a LinkedIn profile.
    pub fn fwe(&self, linkedin_url: &str) -> Result<FweResponse> {
        self.service.get_email_from_profile(&FweParams::new(linkedin_url))
    }

    /// Enriched person from full name and company.
    pub fn tep(&self, full_name: &str, company: &str) -> Result<TepResponse> {
        self.service.enrich_person(&TepParams::new(full_name, company))
    }

    // Company intelligence

    pub fn fcl(&self, query: &str) -> Result<FclResponse> {
        self.service.get_lookalikes(&FclParams::new(query))
    }

    pub fn elf(&self, query: &str) -> Result<ElfResponse> {
        self.service.get_fundraising(&ElfParams::new(query))
    }

    pub fn car(&self, query: &str) -> Result<CarResponse> {
        self.service.get_revenue(&CarParams::new(query))
    }

    pub fn fcc(&self, query: &str) -> Result<FccResponse> {
        self.service.get_subsidiaries(&FccParams::new(query))
    }

    pub fn fts(&self, query: &str) -> Result<FtsResponse> {
        self.service.get_tech_stack(&FtsParams::new(query))
    }

    pub fn enc(&self, query: &str) -> Result<EncResponse> {
        self.service.enrich_company(&EncParams::new(query))
    }

    pub fn cec(&self, query: &str) -> Result<CecResponse> {
        self.service.get_employee_countries(&CecParams::new(query))
    }

    pub fn clo(&self, query: &str) -> Result<CloResponse> {
        self.service.get_locations(&CloParams::new(query))
    }

    // Search

    pub fn cse(&self, params: &CseParams) -> Result<CseResponse> {
        self.service.search_companies(params)
    }

    pub fn pse(&self, params: &PseParams) -> Result<PseResponse> {
        self.service.search_people(params)
    }

    pub fn lbs(&self, params: &LbsParams) -> Result<LbsResponse> {
        self.service.search_local_businesses(params)
    }

    // Website analysis

    /// B2B customers listed on a company website.
    pub fn bcd(&self, url: &str) -> Result<BcdResponse> {
        self.service.extract_b2b_customers(&BcdParams::new(url))
    }

    /// Careers page of a company website.
    pub fn ccp(&self, url: &str) -> Result<CcpResponse> {
        self.service.find_careers_page(&CcpParams::new(url))
    }

    pub fn isc(&self, url: &str) -> Result<IscResponse> {
        self.service.detect_saas(&IscParams::new(url))
    }

    pub fn cbc(&self, url: &str) -> Result<CbcResponse> {
        self.service.get_business_type(&CbcParams::new(url))
    }

    pub fn csc(&self, url: &str) -> Result<CscResponse> {
        self.service.get_mission_statement(&CscParams::new(url))
    }
}
