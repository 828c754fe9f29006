use log::{debug, error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Result;
use crate::options::{
    AddonsOptions, CustomThemeOptions, DisplayOptions, GamepadOptions, KeyMappings, LedOptions,
    PinMappings,
};

/// Flash and heap usage as reported by the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReport {
    pub total_flash: u32,
    pub used_flash: u32,
    pub static_allocs: u32,
    pub total_heap: u32,
    pub used_heap: u32,
}

#[derive(Debug, Deserialize)]
struct FirmwareVersion {
    version: String,
}

/// HTTP client for the device's configuration API.
///
/// One method per endpoint; GET seeds the page models, POST pushes a whole
/// option group in a single atomic request. The client holds no mutable
/// state, so callers are responsible for serializing saves (disable the
/// submit control while a request is in flight).
pub struct ConfigClient {
    client: Client,
    base_url: String,
}

impl ConfigClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status().map_err(|err| {
            error!("{} failed: {}", endpoint, err);
            err
        })?;

        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<()> {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        response.error_for_status().map_err(|err| {
            error!("{} failed: {}", endpoint, err);
            err
        })?;

        info!("{} accepted by device", endpoint);
        Ok(())
    }

    pub async fn get_led_options(&self) -> Result<LedOptions> {
        self.get_json("getLedOptions").await
    }

    /// Push the LED options. `usedPins` is a GET-only field and never part
    /// of the request body.
    pub async fn set_led_options(&self, options: &LedOptions) -> Result<()> {
        self.post_json("setLedOptions", options).await
    }

    pub async fn get_custom_theme(&self) -> Result<CustomThemeOptions> {
        self.get_json("getCustomTheme").await
    }

    pub async fn set_custom_theme(&self, options: &CustomThemeOptions) -> Result<()> {
        self.post_json("setCustomTheme", options).await
    }

    pub async fn get_gamepad_options(&self) -> Result<GamepadOptions> {
        self.get_json("getGamepadOptions").await
    }

    pub async fn set_gamepad_options(&self, options: &GamepadOptions) -> Result<()> {
        self.post_json("setGamepadOptions", options).await
    }

    pub async fn get_addons_options(&self) -> Result<AddonsOptions> {
        self.get_json("getAddonsOptions").await
    }

    pub async fn set_addons_options(&self, options: &AddonsOptions) -> Result<()> {
        self.post_json("setAddonsOptions", options).await
    }

    pub async fn get_display_options(&self) -> Result<DisplayOptions> {
        self.get_json("getDisplayOptions").await
    }

    pub async fn set_display_options(&self, options: &DisplayOptions) -> Result<()> {
        self.post_json("setDisplayOptions", options).await
    }

    pub async fn get_pin_mappings(&self) -> Result<PinMappings> {
        self.get_json("getPinMappings").await
    }

    pub async fn set_pin_mappings(&self, mappings: &PinMappings) -> Result<()> {
        self.post_json("setPinMappings", mappings).await
    }

    pub async fn get_key_mappings(&self) -> Result<KeyMappings> {
        self.get_json("getKeyMappings").await
    }

    pub async fn set_key_mappings(&self, mappings: &KeyMappings) -> Result<()> {
        self.post_json("setKeyMappings", mappings).await
    }

    pub async fn get_firmware_version(&self) -> Result<String> {
        let version: FirmwareVersion = self.get_json("getFirmwareVersion").await?;
        Ok(version.version)
    }

    pub async fn get_memory_report(&self) -> Result<MemoryReport> {
        self.get_json("getMemoryReport").await
    }

    /// Restore the device to factory settings.
    pub async fn reset_settings(&self) -> Result<()> {
        let _: serde_json::Value = self.get_json("resetSettings").await?;
        info!("Device settings reset");
        Ok(())
    }

    /// Reboot the device into the given boot mode.
    pub async fn reboot(&self, boot_mode: u8) -> Result<()> {
        self.post_json("reboot", &serde_json::json!({ "bootMode": boot_mode }))
            .await
    }
}
