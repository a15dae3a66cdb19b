//! `intervia status` - report resolved configuration and readiness.

use intervia_infra::config::AppConfig;

/// Print configuration status, styled or as JSON.
///
/// The key itself never leaves its SecretString; only its presence is
/// reported.
pub fn status(config: AppConfig, json: bool) -> anyhow::Result<()> {
    let key_configured = config.api_key.is_some();
    let web_dir_exists = std::path::Path::new(&config.web_dir).exists();

    if json {
        let report = serde_json::json!({
            "model": config.model,
            "api_key_configured": key_configured,
            "llm_timeout_ms": config.llm_timeout.as_millis() as u64,
            "web_dir": config.web_dir,
            "web_dir_exists": web_dir_exists,
            "ready": key_configured,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Intervia configuration",
        console::style("🔍").bold()
    );
    println!();
    let check_mark = |ok: bool| {
        if ok {
            format!("{}", console::style("✓").green())
        } else {
            format!("{}", console::style("✗").red())
        }
    };
    println!("  {} GOOGLE_API_KEY configured", check_mark(key_configured));
    println!(
        "  {} Model: {}",
        check_mark(true),
        console::style(&config.model).cyan()
    );
    println!(
        "  {} Model call timeout: {}ms",
        check_mark(true),
        config.llm_timeout.as_millis()
    );
    println!(
        "  {} Web directory '{}' exists",
        check_mark(web_dir_exists),
        config.web_dir
    );
    if !key_configured {
        println!();
        println!(
            "  {}",
            console::style("Interviews cannot start without GOOGLE_API_KEY.").yellow()
        );
    }
    println!();

    Ok(())
}
