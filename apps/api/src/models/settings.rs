use serde::{Deserialize, Serialize};

/// Singleton user configuration. Keys are camelCase on the wire, matching
/// what the dashboard frontend sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub profile: Profile,
    pub automation: Automation,
    pub platforms: Vec<PlatformConnection>,
    pub api_settings: ApiSettings,
    pub notifications: Notifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub job_areas: Vec<String>,
    pub experience_level: String,
    pub work_mode: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub auto_search: bool,
    pub auto_apply: bool,
    pub min_compatibility: u8,
    pub search_schedule: String,
    pub max_applications_per_day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConnection {
    pub name: String,
    pub connected: bool,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    pub openai_key: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    pub new_jobs: bool,
    pub applications: bool,
    pub errors: bool,
    pub daily_summary: bool,
}

/// Third-party integrations a connection test may target besides job platforms.
pub const API_SERVICES: [&str; 2] = ["openai", "telegram"];

impl Settings {
    pub fn platform(&self, name: &str) -> Option<&PlatformConnection> {
        self.platforms
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            profile: Profile {
                full_name: String::new(),
                email: String::new(),
                phone: String::new(),
                linkedin: String::new(),
                job_areas: Vec::new(),
                experience_level: "junior".to_string(),
                work_mode: "remote".to_string(),
                keywords: String::new(),
            },
            automation: Automation {
                auto_search: true,
                auto_apply: false,
                min_compatibility: 80,
                search_schedule: "daily".to_string(),
                max_applications_per_day: 10,
            },
            platforms: ["LinkedIn", "Gupy", "Catho"]
                .into_iter()
                .map(|name| PlatformConnection {
                    name: name.to_string(),
                    connected: false,
                    credentials: Credentials::default(),
                })
                .collect(),
            api_settings: ApiSettings::default(),
            notifications: Notifications {
                new_jobs: true,
                applications: true,
                errors: true,
                daily_summary: false,
            },
        }
    }
}
