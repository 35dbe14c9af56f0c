use std::path::PathBuf;

use crate::config::{self, AppPaths, BrowserPaths, Settings};
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;
use crate::profile::ProfileRegistry;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub settings: Settings,
    pub browser: BrowserPaths,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(chrome_dir: Option<PathBuf>, json: bool, verbose: u8) -> AppResult<Self> {
        logging::init(verbose);

        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths)?;
        let browser = BrowserPaths::discover(chrome_dir, &settings)?;
        tracing::debug!(
            settings = %paths.settings_file().display(),
            chrome_dir = %browser.user_data_dir().display(),
            "bootstrapped"
        );

        Ok(Self::new(browser, settings, Output::new(json), verbose))
    }

    pub fn new(browser: BrowserPaths, settings: Settings, output: Output, verbose: u8) -> Self {
        Self {
            verbose,
            settings,
            browser,
            output,
        }
    }

    pub fn profile_registry(&self) -> AppResult<ProfileRegistry> {
        ProfileRegistry::load(&self.browser.local_state_file())
    }
}
