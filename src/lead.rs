use gloo_net::http::Request;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::config::LeadConfig;

/// The four service offerings a consultation can be booked for.
/// Serialized as the Korean label so the collection endpoint and the
/// SMS notification carry the exact strings the business works with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ServiceType {
    #[default]
    MoveInCleaning,
    SickHouseCare,
    WindowCleaning,
    ScreenReplacement,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::MoveInCleaning,
        ServiceType::SickHouseCare,
        ServiceType::WindowCleaning,
        ServiceType::ScreenReplacement,
    ];

    /// Canonical value submitted to the endpoint and embedded in the SMS.
    pub fn label(self) -> &'static str {
        match self {
            ServiceType::MoveInCleaning => "아파트 / 오피스텔 입주 청소",
            ServiceType::SickHouseCare => "새집증후군",
            ServiceType::WindowCleaning => "외창 청소 및 코팅",
            ServiceType::ScreenReplacement => "방충망 교체",
        }
    }

    /// Shorter text shown in the service dropdown.
    pub fn menu_label(self) -> &'static str {
        match self {
            ServiceType::MoveInCleaning => "입주 / 거주 청소",
            ServiceType::SickHouseCare => "새집증후군 케어",
            ServiceType::WindowCleaning => "외창 청소/코팅",
            ServiceType::ScreenReplacement => "방충망 교체",
        }
    }

    /// Maps a `<select>` value back to the offering; unknown values fall
    /// back to the primary offering.
    pub fn from_label(value: &str) -> ServiceType {
        ServiceType::ALL
            .into_iter()
            .find(|s| s.label() == value)
            .unwrap_or_default()
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable text fields of a [`LeadRequest`]. The service dropdown is
/// routed separately since it carries a [`ServiceType`], not free text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LeadField {
    Name,
    Phone,
    Address,
    Size,
}

/// The consultation request collected from a prospective customer.
/// Lives only inside an open dialog; a closed and reopened dialog
/// starts from `LeadRequest::default()`.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct LeadRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub size: String,
    pub service: ServiceType,
}

impl LeadRequest {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Phone => self.phone = value,
            LeadField::Address => self.address = value,
            LeadField::Size => self.size = value,
        }
    }

    /// Every required field non-empty. Phone format and floor-area range
    /// are deliberately not checked.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.size.trim().is_empty()
    }

    /// Subject line attached to the endpoint submission.
    pub fn subject(&self) -> String {
        format!("[더푸른클린 신규 예약] {}님", self.name)
    }

    /// The fixed notification message sent over the secondary channel.
    pub fn sms_body(&self) -> String {
        format!(
            "[더푸른클린 상담예약]\n이름: {}\n연락처: {}\n평수: {}평\n주소: {}\n서비스: {}",
            self.name, self.phone, self.size, self.address, self.service
        )
    }

    /// `sms:` URI opening a composer pre-addressed to the business number
    /// with the notification message pre-filled.
    pub fn sms_uri(&self, notify_phone: &str) -> String {
        format!("sms:{}?body={}", notify_phone, urlencoding::encode(&self.sms_body()))
    }
}

#[derive(Serialize)]
struct LeadPayload<'a> {
    #[serde(flatten)]
    lead: &'a LeadRequest,
    #[serde(rename = "_subject")]
    subject: String,
}

/// Submission failure, split by whether a response was obtained at all.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitError {
    /// The request never produced a response.
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Rejected(u16),
}

impl SubmitError {
    /// Generic message shown to the user; the concrete cause is only logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Network(_) => "네트워크 오류가 발생했습니다.",
            SubmitError::Rejected(_) => "상담 신청 중 오류가 발생했습니다. 다시 시도해주세요.",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(cause) => write!(f, "network failure: {}", cause),
            SubmitError::Rejected(status) => write!(f, "endpoint rejected submission: {}", status),
        }
    }
}

/// Dialog submission lifecycle. Transition methods are total: a call in
/// the wrong state returns the state unchanged, so stray events (double
/// clicks, late timeouts) cannot corrupt the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }

    /// Submit is reachable only from `Idle` with a complete request.
    pub fn submit_allowed(self, lead: &LeadRequest) -> bool {
        self == SubmissionState::Idle && lead.is_complete()
    }

    pub fn begin(self, lead: &LeadRequest) -> SubmissionState {
        if self.submit_allowed(lead) {
            SubmissionState::Submitting
        } else {
            self
        }
    }

    pub fn finish(self, accepted: bool) -> SubmissionState {
        match (self, accepted) {
            (SubmissionState::Submitting, true) => SubmissionState::Success,
            (SubmissionState::Submitting, false) => SubmissionState::Error,
            _ => self,
        }
    }

    /// The user saw the failure alert; the form becomes editable again.
    pub fn acknowledge(self) -> SubmissionState {
        if self == SubmissionState::Error {
            SubmissionState::Idle
        } else {
            self
        }
    }

    /// The post-success display window elapsed; the dialog closes.
    pub fn expire(self) -> SubmissionState {
        if self == SubmissionState::Success {
            SubmissionState::Idle
        } else {
            self
        }
    }
}

/// Posts the lead to the collection endpoint. This call is the system of
/// record: its outcome alone drives the state transition. The secondary
/// SMS notification is dispatched by the caller only after `Ok`.
pub async fn submit_lead(config: &LeadConfig, lead: &LeadRequest) -> Result<(), SubmitError> {
    let payload = LeadPayload { lead, subject: lead.subject() };
    let request = Request::post(&config.endpoint_url)
        .header("Accept", "application/json")
        .json(&payload)
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_lead() -> LeadRequest {
        LeadRequest {
            name: "김민준".to_string(),
            phone: "010-1234-5678".to_string(),
            address: "서울시 강남구".to_string(),
            size: "24".to_string(),
            service: ServiceType::MoveInCleaning,
        }
    }

    #[test]
    fn field_edits_do_not_interfere() {
        let mut lead = LeadRequest::default();
        lead.set(LeadField::Name, "홍길동".to_string());
        lead.set(LeadField::Phone, "010-0000-0000".to_string());
        lead.set(LeadField::Name, "김민준".to_string());
        lead.set(LeadField::Size, "32".to_string());
        lead.set(LeadField::Address, "경기도 성남시".to_string());

        assert_eq!(lead.name, "김민준");
        assert_eq!(lead.phone, "010-0000-0000");
        assert_eq!(lead.address, "경기도 성남시");
        assert_eq!(lead.size, "32");
        assert_eq!(lead.service, ServiceType::MoveInCleaning);
    }

    #[test]
    fn completeness_requires_every_text_field() {
        let mut lead = LeadRequest::default();
        assert!(!lead.is_complete());

        lead.set(LeadField::Name, "김민준".to_string());
        lead.set(LeadField::Phone, "010-1234-5678".to_string());
        lead.set(LeadField::Address, "서울시 강남구".to_string());
        assert!(!lead.is_complete());

        lead.set(LeadField::Size, "24".to_string());
        assert!(lead.is_complete());

        // Whitespace-only values do not count as filled.
        lead.set(LeadField::Phone, "   ".to_string());
        assert!(!lead.is_complete());
    }

    #[test]
    fn submit_unreachable_with_missing_fields_or_while_submitting() {
        let empty = LeadRequest::default();
        assert!(!SubmissionState::Idle.submit_allowed(&empty));
        assert_eq!(SubmissionState::Idle.begin(&empty), SubmissionState::Idle);

        let lead = filled_lead();
        assert!(!SubmissionState::Submitting.submit_allowed(&lead));
        assert_eq!(
            SubmissionState::Submitting.begin(&lead),
            SubmissionState::Submitting
        );
    }

    #[test]
    fn accepted_submission_reaches_success_then_idle_on_expiry() {
        let lead = filled_lead();
        let state = SubmissionState::Idle.begin(&lead);
        assert_eq!(state, SubmissionState::Submitting);

        let state = state.finish(true);
        assert_eq!(state, SubmissionState::Success);

        assert_eq!(state.expire(), SubmissionState::Idle);
    }

    #[test]
    fn rejected_submission_reaches_error_then_idle_on_acknowledge() {
        let lead = filled_lead();
        let state = SubmissionState::Idle.begin(&lead).finish(false);
        assert_eq!(state, SubmissionState::Error);
        assert_eq!(state.acknowledge(), SubmissionState::Idle);

        // The request itself is untouched by the failure and stays complete.
        assert!(lead.is_complete());
        assert!(state.acknowledge().submit_allowed(&lead));
    }

    #[test]
    fn stray_transitions_leave_state_unchanged() {
        assert_eq!(SubmissionState::Idle.finish(true), SubmissionState::Idle);
        assert_eq!(SubmissionState::Idle.expire(), SubmissionState::Idle);
        assert_eq!(SubmissionState::Success.acknowledge(), SubmissionState::Success);
        assert_eq!(SubmissionState::Error.expire(), SubmissionState::Error);
    }

    #[test]
    fn payload_carries_all_fields_and_subject() {
        let lead = filled_lead();
        let payload = LeadPayload { lead: &lead, subject: lead.subject() };
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["name"], "김민준");
        assert_eq!(json["phone"], "010-1234-5678");
        assert_eq!(json["address"], "서울시 강남구");
        assert_eq!(json["size"], "24");
        assert_eq!(json["service"], "아파트 / 오피스텔 입주 청소");
        assert_eq!(json["_subject"], "[더푸른클린 신규 예약] 김민준님");
    }

    #[test]
    fn sms_body_follows_the_fixed_template() {
        let lead = filled_lead();
        assert_eq!(
            lead.sms_body(),
            "[더푸른클린 상담예약]\n이름: 김민준\n연락처: 010-1234-5678\n평수: 24평\n주소: 서울시 강남구\n서비스: 아파트 / 오피스텔 입주 청소"
        );
    }

    #[test]
    fn sms_uri_targets_the_business_number_with_encoded_body() {
        let lead = filled_lead();
        let uri = lead.sms_uri("01053067345");

        assert!(uri.starts_with("sms:01053067345?body="));
        let body = uri.split("body=").nth(1).unwrap();
        // Encoded body must not contain raw reserved characters.
        assert!(!body.contains('\n'));
        assert!(!body.contains(' '));
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(decoded, lead.sms_body());
    }

    #[test]
    fn service_type_round_trips_through_select_values() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_label(service.label()), service);
        }
        // Unknown values fall back to the primary offering.
        assert_eq!(ServiceType::from_label("기타"), ServiceType::MoveInCleaning);
    }

    #[test]
    fn error_messages_are_generic_per_failure_class() {
        assert_eq!(
            SubmitError::Network("fetch failed".to_string()).user_message(),
            "네트워크 오류가 발생했습니다."
        );
        assert_eq!(
            SubmitError::Rejected(422).user_message(),
            "상담 신청 중 오류가 발생했습니다. 다시 시도해주세요."
        );
    }
}
