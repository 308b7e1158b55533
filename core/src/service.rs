//! Endpoint invocation: validate, send, unwrap the envelope and bind.

use crate::bind::bind;
use crate::endpoint::EndpointRequest;
use crate::envelope::flatten;
use crate::error::{CufError, Result};
use crate::params::*;
use crate::responses::*;
use crate::transport::Transport;

/// Typed access to every endpoint over one `Transport`.
#[derive(Debug, Clone)]
pub struct Service {
    transport: Transport,
}

impl Service {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Invoke the endpoint `request` belongs to.
    ///
    /// Validation failures are returned as is and never reach the network.
    /// Every later failure is wrapped in `CufError::Service` tagged with the
    /// endpoint code.
    pub fn call<R: EndpointRequest>(&self, request: &R) -> Result<R::Response> {
        request.validate()?;

        let endpoint = R::ENDPOINT;
        let _span = tracing::debug_span!(
            "cufinder_call",
            endpoint = endpoint.code(),
            description = endpoint.description()
        )
        .entered();

        self.transport
            .send(endpoint.path(), request)
            .map(flatten)
            .and_then(bind::<R::Response>)
            .map_err(|err| {
                tracing::warn!(endpoint = endpoint.code(), error = %err, "call failed");
                CufError::Service {
                    service: endpoint.code(),
                    source: Box::new(err),
                }
            })
    }
}

macro_rules! endpoint_methods {
    ($($(#[$meta:meta])* $method:ident($params:ty) -> $response:ty;)+) => {
        impl Service {
            $(
                $(#[$meta])*
                pub fn $method(&self, params: &$params) -> Result<$response> {
                    self.call(params)
                }
            )+
        }
    };
}

endpoint_methods! {
    /// Company name to domain.
    get_domain(CufParams) -> CufResponse;
    /// Company name to LinkedIn URL.
    get_linkedin_url(LcufParams) -> LcufResponse;
    /// Domain to company name.
    get_company_name(DtcParams) -> DtcResponse;
    get_emails(DteParams) -> DteResponse;
    get_phones(NtpParams) -> NtpResponse;
    reverse_email_lookup(RelParams) -> RelResponse;
    get_lookalikes(FclParams) -> FclResponse;
    get_fundraising(ElfParams) -> ElfResponse;
    get_revenue(CarParams) -> CarResponse;
    get_subsidiaries(FccParams) -> FccResponse;
    get_tech_stack(FtsParams) -> FtsResponse;
    enrich_profile(EppParams) -> EppResponse;
    get_email_from_profile(FweParams) -> FweResponse;
    enrich_person(TepParams) -> TepResponse;
    enrich_company(EncParams) -> EncResponse;
    get_employee_countries(CecParams) -> CecResponse;
    get_locations(CloParams) -> CloResponse;
    search_companies(CseParams) -> CseResponse;
    search_people(PseParams) -> PseResponse;
    search_local_businesses(LbsParams) -> LbsResponse;
    extract_b2b_customers(BcdParams) -> BcdResponse;
    find_careers_page(CcpParams) -> CcpResponse;
    detect_saas(IscParams) -> IscResponse;
    get_business_type(CbcParams) -> CbcResponse;
    get_mission_statement(CscParams) -> CscResponse;
}
