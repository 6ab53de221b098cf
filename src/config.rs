/// Where submitted leads go. Constructed once in `App` and passed down to
/// the consultation dialog, so the endpoint and the notification number
/// are injected rather than read at the point of use.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LeadConfig {
    /// Form-collection endpoint recording the lead.
    pub endpoint_url: String,
    /// Business number the pre-filled SMS notification is addressed to.
    pub notify_phone: String,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "https://formspree.io/f/mwvpdyzl".to_string(),
            notify_phone: "01053067345".to_string(),
        }
    }
}
