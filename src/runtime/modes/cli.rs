//! CLI mode
//!
//! Management commands that run without starting the HTTP server.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::StaticConfig;
use crate::errors::{Result, ServiceError};
use crate::storage::StorageFactory;
use crate::utils::password::hash_password;

pub const MIN_PASSWORD_LEN: usize = 8;

/// 从不同来源获取密码
fn get_password(password: Option<String>, stdin: bool) -> Result<String> {
    if stdin {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ServiceError::bad_request(format!("Failed to read from stdin: {}", e)))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    } else if let Some(pwd) = password {
        Ok(pwd)
    } else {
        prompt_password_with_confirm()
    }
}

/// 交互式输入密码（带确认）
fn prompt_password_with_confirm() -> Result<String> {
    if !io::stdin().is_terminal() {
        return Err(ServiceError::bad_request(
            "No password provided. Use --password or --stdin flag, or run interactively.",
        ));
    }

    let password = rpassword::prompt_password("Enter new password: ")
        .map_err(|e| ServiceError::internal(format!("Failed to read password: {}", e)))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| ServiceError::internal(format!("Failed to read password: {}", e)))?;

    if password != confirm {
        return Err(ServiceError::bad_request("Passwords do not match"));
    }

    Ok(password)
}

pub fn validate_new_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServiceError::bad_request(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// 创建超级用户或重置其密码
pub async fn run_superuser(config: &StaticConfig, password: Option<String>, stdin: bool) -> Result<()> {
    let new_password = get_password(password, stdin)?;
    validate_new_password(&new_password)?;
    let hashed = hash_password(&new_password)?;

    let storage = StorageFactory::create(&config.database).await?;
    let super_user_id = config.auth.super_user_id;
    storage.upsert_super_user(super_user_id, &hashed).await?;
    storage.close().await?;

    println!(
        "{} Super user {} password set",
        "✓".green().bold(),
        super_user_id
    );
    Ok(())
}

pub fn run_config_command(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Generate { output_path } => {
            let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());
            if path == "-" {
                print!("{}", StaticConfig::generate_sample_config()?);
                return Ok(());
            }

            StaticConfig::default().save_to_file(&path)?;
            println!(
                "{} Sample configuration written to {}",
                "✓".green().bold(),
                path
            );
            Ok(())
        }
    }
}

/// Print an error the way every command does and pick the exit code
pub fn report_error(err: &ServiceError) -> i32 {
    eprintln!("{}", err.format_colored());
    let _ = io::stderr().flush();
    1
}
