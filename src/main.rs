/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of atlas-rotor.
 *
 * atlas-rotor is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * atlas-rotor is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with atlas-rotor. If not, see <https://www.gnu.org/licenses/>.
 */

mod analysis;
mod settings;

use std::env;
use tracing_subscriber;
use tracing_appender;
use tracing::{error, info};

use crate::analysis::{AnalysisError, RotorAnalysis};
use crate::settings::RotorSettings;


fn main() -> Result<(), AnalysisError> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "atlas_rotor.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let config_name = env::args().nth(1).unwrap_or_else(|| RotorSettings::CONFIG_FILENAME.to_string());
    let settings = RotorSettings::load(&config_name)?;
    info!("Loaded settings {:?}", settings);

    let analysis = RotorAnalysis::run(&settings).map_err(|e| {
        error!("Rotor analysis failed. {}", e);
        e
    })?;
    println!("{}", analysis.report());
    Ok(())
}
