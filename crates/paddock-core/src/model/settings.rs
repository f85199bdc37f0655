// ── Facility settings singleton ──
//
// Unlike the collections, settings have no id on the client side and
// always exist: a backend that never stored any still answers with its
// seeded default, and a failed load keeps the built-in copy below.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilitySettings {
    /// Backend document id, if the server sends one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub facility_name: String,
    pub registration_number: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub operating_hours: String,
    pub notification_preferences: NotificationPreferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_backup: Option<DateTime<Utc>>,
}

impl Default for FacilitySettings {
    fn default() -> Self {
        Self {
            id: None,
            facility_name: "Green Valley Animal Care Center".into(),
            registration_number: "FAC-2023-001".into(),
            address: "123 Animal Care Lane, Green Valley, CA 90210".into(),
            phone: "(555) 123-4567".into(),
            email: "contact@greenvalley.com".into(),
            operating_hours: "Monday - Saturday: 8:00 AM - 6:00 PM".into(),
            notification_preferences: NotificationPreferences::default(),
            last_backup: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub low_stock_alerts: bool,
    pub health_reminders: bool,
    pub breeding_alerts: bool,
    pub feeding_reminders: bool,
    pub email_summary: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            low_stock_alerts: true,
            health_reminders: true,
            breeding_alerts: true,
            feeding_reminders: true,
            email_summary: false,
        }
    }
}

/// Names one of the five notification flags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum NotificationPreference {
    LowStockAlerts,
    HealthReminders,
    BreedingAlerts,
    FeedingReminders,
    EmailSummary,
}

impl NotificationPreferences {
    pub fn get(&self, pref: NotificationPreference) -> bool {
        match pref {
            NotificationPreference::LowStockAlerts => self.low_stock_alerts,
            NotificationPreference::HealthReminders => self.health_reminders,
            NotificationPreference::BreedingAlerts => self.breeding_alerts,
            NotificationPreference::FeedingReminders => self.feeding_reminders,
            NotificationPreference::EmailSummary => self.email_summary,
        }
    }

    pub fn set(&mut self, pref: NotificationPreference, value: bool) {
        let slot = match pref {
            NotificationPreference::LowStockAlerts => &mut self.low_stock_alerts,
            NotificationPreference::HealthReminders => &mut self.health_reminders,
            NotificationPreference::BreedingAlerts => &mut self.breeding_alerts,
            NotificationPreference::FeedingReminders => &mut self.feeding_reminders,
            NotificationPreference::EmailSummary => &mut self.email_summary,
        };
        *slot = value;
    }

    /// Copy with exactly one flag flipped.
    #[must_use]
    pub fn toggled(mut self, pref: NotificationPreference) -> Self {
        self.set(pref, !self.get(pref));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn toggled_flips_only_the_named_flag() {
        let base = NotificationPreferences::default();
        for pref in NotificationPreference::iter() {
            let flipped = base.toggled(pref);
            assert_eq!(flipped.get(pref), !base.get(pref));
            for other in NotificationPreference::iter().filter(|p| *p != pref) {
                assert_eq!(flipped.get(other), base.get(other), "{other} changed");
            }
        }
    }

    #[test]
    fn partial_settings_fill_from_default() {
        let parsed: FacilitySettings =
            serde_json::from_str(r#"{"facilityName":"Hilltop","notificationPreferences":{"emailSummary":true}}"#)
                .unwrap();
        assert_eq!(parsed.facility_name, "Hilltop");
        assert_eq!(parsed.phone, "(555) 123-4567");
        assert!(parsed.notification_preferences.email_summary);
        assert!(parsed.notification_preferences.low_stock_alerts);
    }

    #[test]
    fn preference_names_use_wire_spelling() {
        assert_eq!(NotificationPreference::LowStockAlerts.to_string(), "lowStockAlerts");
        assert_eq!(
            "emailsummary".parse::<NotificationPreference>().unwrap(),
            NotificationPreference::EmailSummary
        );
    }
}
