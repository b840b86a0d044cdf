mod mailto;
mod relay;

pub use mailto::{encode_uri_component, MailtoLink};
pub use relay::{EmailJsRelay, Relay, RelayConfig, RelayError, TemplateParams, EMAILJS_ENDPOINT};

use std::rc::Rc;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::PERSONAL_INFO;

pub const FAILURE_NOTICE: &str =
    "Sorry, something went wrong. Please try again later or email me directly.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn subject(&self) -> String {
        format!("Portfolio contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }
}

/// Who contact messages are addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn site_owner() -> Self {
        Self {
            name: PERSONAL_INFO.short_name.to_string(),
            email: PERSONAL_INFO.email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Relay,
    LocalMail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: Channel,
}

impl Delivery {
    /// Message shown to the visitor after submitting.
    pub fn notice(&self, recipient: &Recipient) -> String {
        match self.channel {
            Channel::Relay => {
                "Thank you for your message! I will get back to you soon.".to_string()
            }
            Channel::LocalMail => format!(
                "Opening your email app to send the message. If it did not open, please email me directly at: {}",
                recipient.email
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("could not open mail client: {0}")]
    Handoff(String),
}

/// Hands a `mailto:` URI to the visitor's mail application.
pub trait MailHandoff {
    fn open(&self, uri: &str) -> Result<(), ContactError>;
}

/// Best-effort delivery of contact messages: relay first, `mailto:` otherwise.
#[derive(Clone)]
pub struct ContactDispatcher {
    relay: Option<Rc<dyn Relay>>,
    mail: Rc<dyn MailHandoff>,
    recipient: Recipient,
}

impl ContactDispatcher {
    pub fn new(
        relay: Option<Rc<dyn Relay>>,
        mail: Rc<dyn MailHandoff>,
        recipient: Recipient,
    ) -> Self {
        Self {
            relay,
            mail,
            recipient,
        }
    }

    /// Dispatcher for the site owner, using EmailJS when `config` is complete.
    pub fn from_config(config: Option<RelayConfig>, mail: Rc<dyn MailHandoff>) -> Self {
        let relay = config.map(|c| Rc::new(EmailJsRelay::new(c)) as Rc<dyn Relay>);
        Self::new(relay, mail, Recipient::site_owner())
    }

    pub fn has_relay(&self) -> bool {
        self.relay.is_some()
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Relay failures never surface here; they fall back to the mail client.
    /// Only a failed handoff is returned as an error.
    pub async fn send(&self, payload: &ContactPayload) -> Result<Delivery, ContactError> {
        match &self.relay {
            Some(relay) => {
                let params = TemplateParams::new(payload, &self.recipient);
                match relay.send(&params).await {
                    Ok(status) if status == StatusCode::OK => {
                        log::info!("contact message sent through relay");
                        return Ok(Delivery {
                            channel: Channel::Relay,
                        });
                    }
                    Ok(status) => {
                        log::warn!("{}, falling back to mailto", RelayError::Status(status))
                    }
                    Err(e) => log::warn!("{e}, falling back to mailto"),
                }
            }
            None => log::info!("relay not configured, using mailto"),
        }

        let link = MailtoLink::for_payload(self.recipient.email.clone(), payload);
        self.mail.open(&link.uri())?;
        Ok(Delivery {
            channel: Channel::LocalMail,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;

    enum Outcome {
        Status(StatusCode),
        Fail,
    }

    struct FakeRelay {
        outcome: Outcome,
        calls: Cell<usize>,
        last: RefCell<Option<TemplateParams>>,
    }

    impl FakeRelay {
        fn new(outcome: Outcome) -> Rc<Self> {
            Rc::new(Self {
                outcome,
                calls: Cell::new(0),
                last: RefCell::new(None),
            })
        }
    }

    #[async_trait(?Send)]
    impl Relay for FakeRelay {
        async fn send(&self, params: &TemplateParams) -> Result<StatusCode, RelayError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(params.clone());
            match self.outcome {
                Outcome::Status(status) => Ok(status),
                Outcome::Fail => Err(RelayError::Network("connection refused".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingHandoff {
        opened: RefCell<Vec<String>>,
    }

    impl MailHandoff for RecordingHandoff {
        fn open(&self, uri: &str) -> Result<(), ContactError> {
            self.opened.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    struct BrokenHandoff;

    impl MailHandoff for BrokenHandoff {
        fn open(&self, _uri: &str) -> Result<(), ContactError> {
            Err(ContactError::Handoff("no window".to_string()))
        }
    }

    fn percent_decode(input: &str) -> String {
        let bytes = input.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).unwrap()
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let query = uri.split_once('?').unwrap().1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
            .unwrap()
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Grace Hopper".to_string(),
            email: "grace+navy@example.com".to_string(),
            message: "Hi! Let's talk about COBOL & compilers.\nThanks, 100% sure?".to_string(),
        }
    }

    fn recipient() -> Recipient {
        Recipient {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_relay_success_skips_mailto() {
        let relay = FakeRelay::new(Outcome::Status(StatusCode::OK));
        let mail = Rc::new(RecordingHandoff::default());
        let dispatcher = ContactDispatcher::new(
            Some(relay.clone() as Rc<dyn Relay>),
            mail.clone(),
            recipient(),
        );

        let delivery = dispatcher.send(&payload()).await.unwrap();

        assert_eq!(delivery.channel, Channel::Relay);
        assert!(mail.opened.borrow().is_empty());
        assert_eq!(relay.calls.get(), 1);
        let sent = relay.last.borrow().clone().unwrap();
        assert_eq!(sent.from_name, "Grace Hopper");
        assert_eq!(sent.reply_to, "grace+navy@example.com");
        assert_eq!(sent.to, "owner@example.com");
    }

    #[tokio::test]
    async fn test_without_relay_opens_mailto() {
        let mail = Rc::new(RecordingHandoff::default());
        let dispatcher = ContactDispatcher::new(None, mail.clone(), recipient());
        assert!(!dispatcher.has_relay());

        let delivery = dispatcher.send(&payload()).await.unwrap();

        assert_eq!(delivery.channel, Channel::LocalMail);
        let opened = mail.opened.borrow();
        assert_eq!(opened.len(), 1);
        let uri = &opened[0];
        assert!(uri.starts_with("mailto:owner@example.com?"));
        assert_eq!(
            percent_decode(query_param(uri, "subject")),
            "Portfolio contact from Grace Hopper"
        );
        assert_eq!(
            percent_decode(query_param(uri, "body")),
            "Name: Grace Hopper\nEmail: grace+navy@example.com\n\nHi! Let's talk about COBOL & compilers.\nThanks, 100% sure?"
        );
    }

    #[tokio::test]
    async fn test_relay_failure_falls_back() {
        let relay = FakeRelay::new(Outcome::Fail);
        let mail = Rc::new(RecordingHandoff::default());
        let dispatcher = ContactDispatcher::new(
            Some(relay.clone() as Rc<dyn Relay>),
            mail.clone(),
            recipient(),
        );

        let delivery = dispatcher.send(&payload()).await.unwrap();

        assert_eq!(delivery.channel, Channel::LocalMail);
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(mail.opened.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_non_ok_status_falls_back() {
        for status in [StatusCode::BAD_REQUEST, StatusCode::ACCEPTED, StatusCode::BAD_GATEWAY] {
            let relay = FakeRelay::new(Outcome::Status(status));
            let mail = Rc::new(RecordingHandoff::default());
            let dispatcher = ContactDispatcher::new(Some(relay as Rc<dyn Relay>), mail.clone(), recipient());

            let delivery = dispatcher.send(&payload()).await.unwrap();

            assert_eq!(delivery.channel, Channel::LocalMail, "status {status}");
            assert_eq!(mail.opened.borrow().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_handoff_failure_is_reported() {
        let dispatcher = ContactDispatcher::new(None, Rc::new(BrokenHandoff), recipient());
        let err = dispatcher.send(&payload()).await.unwrap_err();
        assert_eq!(err, ContactError::Handoff("no window".to_string()));
    }

    #[test]
    fn test_from_config() {
        let mail: Rc<dyn MailHandoff> = Rc::new(RecordingHandoff::default());
        let config = RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key"));
        assert!(ContactDispatcher::from_config(config, mail.clone()).has_relay());
        let dispatcher = ContactDispatcher::from_config(None, mail);
        assert!(!dispatcher.has_relay());
        assert_eq!(dispatcher.recipient(), &Recipient::site_owner());
    }

    #[test]
    fn test_notices() {
        let recipient = recipient();
        let relay = Delivery {
            channel: Channel::Relay,
        };
        let local = Delivery {
            channel: Channel::LocalMail,
        };
        assert!(relay.notice(&recipient).starts_with("Thank you"));
        assert!(local.notice(&recipient).ends_with("owner@example.com"));
    }
}
