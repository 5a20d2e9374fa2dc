use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operating hours, one display string per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for WeekHours {
    fn default() -> Self {
        let weekday = "9:00 AM - 9:00 PM".to_string();
        Self {
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday,
            friday: "9:00 AM - 10:00 PM".to_string(),
            saturday: "10:00 AM - 10:00 PM".to_string(),
            sunday: "10:00 AM - 8:00 PM".to_string(),
        }
    }
}

/// The singleton store-settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    // Store identity
    pub store_name: String,
    pub store_description: String,
    pub store_tagline: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub store_logo: String,
    pub primary_color: String,

    // Contact information
    pub store_email: String,
    pub store_phone: String,
    pub store_address: String,

    // Business settings
    pub currency: String,
    pub currency_symbol: String,
    pub tax_rate: f64,

    pub hours: WeekHours,

    // SEO
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,

    // Social media
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,

    // Feature toggles
    pub enable_delivery: bool,
    pub enable_pickup: bool,
    pub enable_catering: bool,
    pub enable_loyalty: bool,

    // Store availability
    pub show_menu: bool,
    pub menu_message: String,

    pub updated_at: DateTime<Utc>,
}

impl StoreSettings {
    /// The defaults used when no settings record exists yet.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            store_name: "Picnic".to_string(),
            store_description: "Sandwiches worth stopping for".to_string(),
            store_tagline: "Fresh sandwiches, made to order".to_string(),
            hero_title: "Fresh sandwiches, made to order".to_string(),
            hero_subtitle: "Order your favorite today!".to_string(),
            store_logo: "🧺".to_string(),
            primary_color: "orange".to_string(),
            store_email: "orders@picnic.example".to_string(),
            store_phone: "+1 (555) 123-4567".to_string(),
            store_address: "123 Main St, City, State 12345".to_string(),
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            tax_rate: 0.0,
            hours: WeekHours::default(),
            meta_title: "Picnic - Sandwich Ordering".to_string(),
            meta_description: "Fresh made-to-order sandwiches".to_string(),
            meta_keywords: "sandwiches, food delivery, online ordering".to_string(),
            website: "https://picnic.example".to_string(),
            instagram: String::new(),
            facebook: String::new(),
            twitter: String::new(),
            enable_delivery: true,
            enable_pickup: true,
            enable_catering: false,
            enable_loyalty: false,
            show_menu: true,
            menu_message: "Our store is currently closed. Please check back soon!".to_string(),
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: SettingsPatch, now: DateTime<Utc>) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = patch.$field {
                    self.$field = value;
                })*
            };
        }
        merge!(
            store_name,
            store_description,
            store_tagline,
            hero_title,
            hero_subtitle,
            store_logo,
            primary_color,
            store_email,
            store_phone,
            store_address,
            currency,
            currency_symbol,
            tax_rate,
            hours,
            meta_title,
            meta_description,
            meta_keywords,
            website,
            instagram,
            facebook,
            twitter,
            enable_delivery,
            enable_pickup,
            enable_catering,
            enable_loyalty,
            show_menu,
            menu_message,
        );
        self.updated_at = now;
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub store_tagline: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub store_logo: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub store_email: Option<String>,
    #[serde(default)]
    pub store_phone: Option<String>,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub hours: Option<WeekHours>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub enable_delivery: Option<bool>,
    #[serde(default)]
    pub enable_pickup: Option<bool>,
    #[serde(default)]
    pub enable_catering: Option<bool>,
    #[serde(default)]
    pub enable_loyalty: Option<bool>,
    #[serde(default)]
    pub show_menu: Option<bool>,
    #[serde(default)]
    pub menu_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_present_fields_only() {
        let now = Utc::now();
        let mut settings = StoreSettings::defaults(now);
        settings.apply_patch(
            SettingsPatch {
                store_name: Some("Roadside Picnic".to_string()),
                show_menu: Some(false),
                ..SettingsPatch::default()
            },
            now,
        );

        assert_eq!(settings.store_name, "Roadside Picnic");
        assert!(!settings.show_menu);
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn empty_patch_still_touches_updated_at() {
        let created = Utc::now();
        let mut settings = StoreSettings::defaults(created);
        let later = created + chrono::Duration::minutes(1);

        settings.apply_patch(SettingsPatch::default(), later);

        assert_eq!(settings.updated_at, later);
    }
}
