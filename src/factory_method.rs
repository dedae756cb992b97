//! Factory Method: each creator decides which notification channel to build.
//!
//! Run with: cargo run --bin p2_factory_method

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

// ============================================================================
// Products
// ============================================================================

/// The product every creator hands out.
pub trait Notification {
    fn send(&self, recipient: &str, message: &str) -> String;
    fn channel(&self) -> Channel;
}

pub struct EmailNotification;
impl Notification for EmailNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending email to {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::Email
    }
}

pub struct SmsNotification;
impl Notification for SmsNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending SMS to {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::Sms
    }
}

pub struct PushNotification;
impl Notification for PushNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending push notification to device {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::Push
    }
}

pub struct SlackNotification;
impl Notification for SlackNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending Slack message to channel {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::Slack
    }
}

pub struct WhatsAppNotification;
impl Notification for WhatsAppNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending WhatsApp to {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::WhatsApp
    }
}

pub struct TelegramNotification;
impl Notification for TelegramNotification {
    fn send(&self, recipient: &str, message: &str) -> String {
        format!("Sending Telegram message to {}: {}", recipient, message)
    }
    fn channel(&self) -> Channel {
        Channel::Telegram
    }
}

// ============================================================================
// Creators
// ============================================================================

/// Creator: subclasses only supply the factory method, the sending logic is
/// shared.
pub trait NotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification>;

    fn send_notification(&self, recipient: &str, message: &str) -> String {
        let notification = self.create_notification();
        notification.send(recipient, message)
    }
}

pub struct EmailNotificationFactory;
impl NotificationFactory for EmailNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(EmailNotification)
    }
}

pub struct SmsNotificationFactory;
impl NotificationFactory for SmsNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SmsNotification)
    }
}

pub struct PushNotificationFactory;
impl NotificationFactory for PushNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(PushNotification)
    }
}

pub struct SlackNotificationFactory;
impl NotificationFactory for SlackNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SlackNotification)
    }
}

pub struct WhatsAppNotificationFactory;
impl NotificationFactory for WhatsAppNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(WhatsAppNotification)
    }
}

pub struct TelegramNotificationFactory;
impl NotificationFactory for TelegramNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(TelegramNotification)
    }
}

// ============================================================================
// Channel lookup
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
    Push,
    Slack,
    WhatsApp,
    Telegram,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Email,
        Channel::Sms,
        Channel::Push,
        Channel::Slack,
        Channel::WhatsApp,
        Channel::Telegram,
    ];

    /// Pick the creator for this channel at runtime.
    pub fn factory(self) -> Box<dyn NotificationFactory> {
        match self {
            Channel::Email => Box::new(EmailNotificationFactory),
            Channel::Sms => Box::new(SmsNotificationFactory),
            Channel::Push => Box::new(PushNotificationFactory),
            Channel::Slack => Box::new(SlackNotificationFactory),
            Channel::WhatsApp => Box::new(WhatsAppNotificationFactory),
            Channel::Telegram => Box::new(TelegramNotificationFactory),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Push => "push",
            Channel::Slack => "slack",
            Channel::WhatsApp => "whatsapp",
            Channel::Telegram => "telegram",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            "push" => Ok(Channel::Push),
            "slack" => Ok(Channel::Slack),
            "whatsapp" => Ok(Channel::WhatsApp),
            "telegram" => Ok(Channel::Telegram),
            _ => Err(PatternError::UnknownChannel(s.to_string())),
        }
    }
}

/// Client code only knows the creator interface.
pub fn client_code(factory: &dyn NotificationFactory, recipient: &str, message: &str) -> String {
    factory.send_notification(recipient, message)
}

pub fn demo() -> Vec<String> {
    let sends: [(Box<dyn NotificationFactory>, &str, &str); 6] = [
        (Box::new(EmailNotificationFactory), "user@example.com", "Hello via Email!"),
        (Box::new(SmsNotificationFactory), "+1234567890", "Hello via SMS!"),
        (Box::new(PushNotificationFactory), "device-12345", "Hello via Push Notification!"),
        (Box::new(SlackNotificationFactory), "#general", "Hello via Slack!"),
        (Box::new(WhatsAppNotificationFactory), "+1234567890", "Hello via WhatsApp!"),
        (Box::new(TelegramNotificationFactory), "@username", "Hello via Telegram!"),
    ];

    sends
        .iter()
        .map(|(factory, recipient, message)| client_code(factory.as_ref(), recipient, message))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
