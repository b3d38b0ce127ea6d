//! Presentation shell — terminal rendering and the input loop.
//!
//! Pure view glue: every decision about what comes next lives in the wizard
//! and gate state machines; this module only renders the current screen,
//! collects a line of input, and feeds events back in.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context as _, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{AppConfig, CURRENCY, PRICE};
use crate::copy;
use crate::flow;
use crate::paywall::{GateState, PayPalClient, UnlockGate};
use crate::reading::{GeminiClient, LoveResult, MoneyResult, Reading, ReadingBackend};
use crate::wizard::answers::{Category, DatePart, Gender, SubjectRecord, TIME_UNKNOWN};
use crate::wizard::{Screen, Subject, WizardEvent, WizardState};

/// Sentinel the prompt loop maps to a retreat event.
const BACK_CMD: &str = "b";

/// Run one full session: wizard → reading → paywalled result.
pub async fn run(config: &AppConfig) -> Result<()> {
    let backend = GeminiClient::new(
        &config.gemini_base_url,
        &config.gemini_model,
        &config.gemini_api_key,
    );
    run_with_backend(config, &backend).await
}

/// Same as [`run`] but with an injectable backend (tests use a stub).
pub async fn run_with_backend(config: &AppConfig, backend: &dyn ReadingBackend) -> Result<()> {
    let mut wizard = WizardState::new();
    let mut reading: Option<Reading> = None;

    println!("\n  {}\n", copy::HEADER);

    loop {
        match wizard.screen() {
            Screen::CategorySelect => category_select(&mut wizard)?,
            Screen::SubjectDetails(subject) => subject_details(&mut wizard, subject)?,
            Screen::Context => context_screen(&mut wizard)?,
            Screen::FinalQuestion => {
                if final_question(&mut wizard)? {
                    // Submitted — the wizard is now on the processing screen.
                    reading = processing(&mut wizard, backend, config).await;
                }
            }
            Screen::Processing => {
                // Only reachable through submit; nothing to do here.
            }
            Screen::Results => {
                let reading = reading
                    .as_ref()
                    .context("results screen reached without a reading")?;
                results(reading, config).await?;
                return Ok(());
            }
        }
    }
}

// ─── Input helpers ────────────────────────────────────────────────────────────

fn prompt(label: &str) -> Result<String> {
    print!("  {label}: ");
    io::stdout().flush()?;
    read_reply(&mut io::stdin().lock())
}

/// Read one reply line. EOF is an error, not an empty reply — with stdin
/// gone the wizard can never advance, so the session ends instead of
/// re-rendering the same screen forever.
fn read_reply(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn progress_line(wizard: &WizardState) {
    print!("\n  [step {}/{}]", wizard.position() + 1, wizard.total_steps());
    if wizard.can_retreat() {
        print!("  ({BACK_CMD} = {})", copy::BACK);
    }
    println!();
}

// ─── Screens ──────────────────────────────────────────────────────────────────

fn category_select(wizard: &mut WizardState) -> Result<()> {
    println!("\n  {}", copy::MODE_TITLE);
    println!("  {}\n", copy::MODE_SUBTITLE);
    println!("    1) {}", copy::MODE_LOVE);
    println!("    2) {}", copy::MODE_MONEY);

    match prompt("choose 1 or 2")?.trim() {
        "1" => wizard.apply(WizardEvent::SelectCategory(Category::Love)),
        "2" => wizard.apply(WizardEvent::SelectCategory(Category::Money)),
        _ => {}
    }
    Ok(())
}

fn subject_details(wizard: &mut WizardState, subject: Subject) -> Result<()> {
    progress_line(wizard);
    let (title, subtitle, name_ph, cta) = match subject {
        Subject::You => (
            copy::USER_TITLE,
            copy::USER_SUBTITLE,
            copy::USER_NAME_PH,
            copy::USER_CTA,
        ),
        Subject::Partner => (
            copy::PARTNER_TITLE,
            copy::PARTNER_SUBTITLE,
            copy::PARTNER_NAME_PH,
            copy::PARTNER_CTA,
        ),
    };
    println!("  {title}");
    println!("  {subtitle}\n");

    let name = prompt(&format!("identity ({name_ph})"))?;
    if name == BACK_CMD {
        // Backing out before supplying anything must not construct the
        // partner record.
        wizard.apply(WizardEvent::Retreat);
        return Ok(());
    }

    // The partner record comes into existence here, explicitly, with its
    // declared defaults — never as a side effect of a field write.
    let record: &mut SubjectRecord = match subject {
        Subject::You => &mut wizard.answers.user,
        Subject::Partner => wizard.answers.ensure_partner(),
    };
    if !name.is_empty() {
        record.name = name;
    }

    record.set_date_part(DatePart::Year, &prompt("origin point — year (YYYY)")?);
    record.set_date_part(DatePart::Month, &normalize_month(&prompt("month (1-12)")?));
    record.set_date_part(DatePart::Day, &prompt("day (DD)")?);

    let time = prompt("time segment (HH, enter to skip)")?;
    record.birth_time = match time.parse::<u32>() {
        Ok(h) if h < 24 => format!("{h:02}:00"),
        _ => TIME_UNKNOWN.to_string(),
    };

    if let Some(gender) = parse_gender(&prompt("polarity (M/F/O/-)")?) {
        record.gender = gender;
    }

    if record.is_ready() {
        println!("\n  {cta}");
        wizard.apply(WizardEvent::Advance);
    } else {
        println!("\n  incomplete — name and full birth date are required");
    }
    Ok(())
}

fn normalize_month(input: &str) -> String {
    match input.trim().parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => format!("{m:02}"),
        _ => String::new(),
    }
}

fn parse_gender(input: &str) -> Option<Gender> {
    match input.trim().to_ascii_uppercase().as_str() {
        "M" => Some(Gender::M),
        "F" => Some(Gender::F),
        "O" => Some(Gender::Other),
        "-" => Some(Gender::PreferNot),
        _ => None,
    }
}

fn context_screen(wizard: &mut WizardState) -> Result<()> {
    progress_line(wizard);
    let love = wizard.answers.mode == Some(Category::Love);
    let (title, subtitle, ph) = if love {
        (
            copy::CONTEXT_LOVE_TITLE,
            copy::CONTEXT_LOVE_SUBTITLE,
            copy::CONTEXT_LOVE_PH,
        )
    } else {
        (
            copy::CONTEXT_MONEY_TITLE,
            copy::CONTEXT_MONEY_SUBTITLE,
            copy::CONTEXT_MONEY_PH,
        )
    };
    println!("  {title}");
    println!("  {subtitle}");
    println!("  {ph}\n");

    let input = prompt(copy::CONTEXT_CTA)?;
    if input == BACK_CMD {
        wizard.apply(WizardEvent::Retreat);
    } else {
        *wizard.answers.context_mut() = input;
        wizard.apply(WizardEvent::Advance);
    }
    Ok(())
}

/// Returns true when the user submitted (wizard jumped to processing).
fn final_question(wizard: &mut WizardState) -> Result<bool> {
    progress_line(wizard);
    let ph = if wizard.answers.mode == Some(Category::Love) {
        copy::FINAL_LOVE_PH
    } else {
        copy::FINAL_MONEY_PH
    };
    println!("  {}", copy::FINAL_TITLE);
    println!("  {}", copy::FINAL_SUBTITLE);
    println!("  {ph}\n");

    let input = prompt(copy::FINAL_CTA)?;
    if input == BACK_CMD {
        wizard.apply(WizardEvent::Retreat);
        return Ok(false);
    }
    wizard.answers.final_question = input;
    wizard.apply(WizardEvent::Submit);
    Ok(true)
}

/// Drive the processing screen: spinner + joined minimum wait, then route
/// the wizard to results or back to the start.
async fn processing(
    wizard: &mut WizardState,
    backend: &dyn ReadingBackend,
    config: &AppConfig,
) -> Option<Reading> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.red} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "{} // {}",
        copy::PROCESSING_TITLE,
        copy::PROCESSING_SUBTITLE
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let min_wait = Duration::from_millis(config.min_processing_ms);
    let outcome = flow::fetch_reading(backend, &wizard.answers, min_wait).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(reading) => {
            wizard.apply(WizardEvent::ReadingReady);
            Some(reading)
        }
        Err(_) => {
            println!("\n  {}\n", copy::READING_FAILED);
            wizard.apply(WizardEvent::ReadingFailed);
            None
        }
    }
}

// ─── Results + paywall ────────────────────────────────────────────────────────

async fn results(reading: &Reading, config: &AppConfig) -> Result<()> {
    let mut gate = UnlockGate::new();

    loop {
        println!("{}", render_reading(reading, &gate));
        if gate.is_unlocked() {
            render_share(reading);
            return Ok(());
        }
        if !checkout_round(reading, config, &mut gate).await? {
            return Ok(());
        }
    }
}

/// One trip through the paywall panel. Returns false when the user walks
/// away still locked.
async fn checkout_round(
    reading: &Reading,
    config: &AppConfig,
    gate: &mut UnlockGate,
) -> Result<bool> {
    render_paywall(reading);

    match gate.state().clone() {
        GateState::EnvironmentBlocked { reason } => {
            println!("\n  {}", copy::ENV_BLOCKED_TITLE);
            println!("  {}", copy::ENV_BLOCKED_BODY);
            println!("  ({reason})");
            match prompt(&format!("[r] {} / [q] quit", copy::ENV_BLOCKED_RETRY))?.as_str() {
                "r" => {
                    gate.retry_initialization();
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
        GateState::CaptureFailed { order_id } => {
            println!("\n  {}", copy::CAPTURE_FAILED);
            match prompt("[c] retry capture / [q] quit")?.as_str() {
                "c" => {
                    match init_gateway(config) {
                        Ok(client) => capture_into_gate(&client, &order_id, gate).await,
                        // The gate stays in CaptureFailed on purpose: the
                        // approved order is still retryable once the
                        // gateway comes back. Tell the user what happened.
                        Err(reason) => println!("{}", gateway_unavailable_banner(&reason)),
                    }
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
        _ => {
            println!("\n  {}", copy::CHECKOUT_GATEWAY);
            match prompt("[p] pay / [q] quit")?.as_str() {
                "p" => {
                    run_checkout(config, gate).await?;
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
    }
}

fn gateway_unavailable_banner(reason: &str) -> String {
    format!("\n  {}\n  ({reason})", copy::ENV_BLOCKED_TITLE)
}

fn init_gateway(config: &AppConfig) -> std::result::Result<PayPalClient, String> {
    PayPalClient::new(
        &config.paypal_base_url,
        &config.paypal_client_id,
        &config.paypal_secret,
    )
    .map_err(|e| e.to_string())
}

/// Create the order, hand out the approval link, wait, capture.
async fn run_checkout(config: &AppConfig, gate: &mut UnlockGate) -> Result<()> {
    let client = match init_gateway(config) {
        Ok(c) => c,
        Err(reason) => {
            gate.environment_blocked(&reason);
            return Ok(());
        }
    };

    let order = match client
        .create_order(PRICE, CURRENCY, copy::CHECKOUT_ITEM_DESCRIPTION)
        .await
    {
        Ok(order) => order,
        Err(e) => {
            gate.environment_blocked(&e.to_string());
            return Ok(());
        }
    };
    gate.checkout_started(&order.id);

    println!("\n  approve the payment in your browser:");
    println!("    {}", order.approve_url);
    prompt("press enter once approved")?;

    capture_into_gate(&client, &order.id, gate).await;
    Ok(())
}

async fn capture_into_gate(client: &PayPalClient, order_id: &str, gate: &mut UnlockGate) {
    match client.capture(order_id).await {
        Ok(()) => gate.capture_succeeded(),
        Err(_) => gate.capture_failed(),
    }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

/// Build the result text for the current gate state. Returned rather than
/// printed so the lock/unlock gating is observable in tests; while locked,
/// gated fields are never read at all.
fn render_reading(reading: &Reading, gate: &UnlockGate) -> String {
    let mut out = vec![
        format!("\n  ════ {} ════", reading.free.headline),
        format!("  {}\n", reading.free.one_liner),
    ];
    match (&reading.love_result, &reading.money_result) {
        (Some(love), _) => out.push(render_love(love, gate.is_unlocked())),
        (_, Some(money)) => out.push(render_money(money, gate.is_unlocked())),
        _ => {}
    }
    out.join("\n")
}

fn render_love(res: &LoveResult, unlocked: bool) -> String {
    let mut out = vec![
        format!("  [{}]  ODDS: {}", res.badge, res.total_score),
        format!("  \"{}\"\n", res.summary),
    ];

    let attraction = &res.partner_instinctive_attraction;
    out.push(format!("  {} — \"{}\"", attraction.title, attraction.quote));
    out.push(format!("  {}\n", attraction.why));

    for item in &res.score_breakdown {
        out.push(format!(
            "    {:<28} {:>3}  [{}]",
            item.label, item.score, item.tier
        ));
    }

    for section in &res.locked_sections {
        out.push(format!("\n  ── {} ({})", section.title, section.id));
        if unlocked {
            // `content` is optional on the wire; an absent field renders as
            // nothing rather than failing the whole reading.
            if let Some(content) = &section.content {
                out.push(format!("  {content}"));
            }
        } else {
            out.push(format!("  [locked] \"{}...\"", section.preview_quote));
        }
    }
    out.join("\n")
}

fn render_money(res: &MoneyResult, unlocked: bool) -> String {
    let mut out = vec![
        format!("  {}", res.risk_map_title),
        format!("  {}\n", res.free_insight),
    ];

    for event in &res.free_timeline {
        out.push(format!("  ── {} — {}", event.window, event.theme));
        out.push(format!("     POWER MOVE: {}", event.best_action));
        out.push(format!("     VOID:       {}", event.avoid));
    }

    if unlocked {
        out.push(format!(
            "\n  HIGHEST ROI HABIT: {}",
            res.locked.highest_roi_habit
        ));
        out.push("  DANGER ZONES:".to_string());
        for zone in &res.locked.danger_zones {
            out.push(format!("    - {zone}"));
        }
        out.push("  NEXT MOVE CHECKLIST:".to_string());
        for item in &res.locked.next_move_checklist {
            out.push(format!("    / {item}"));
        }
    } else {
        out.push("\n  [locked] Tactical Strategy Protocol".to_string());
    }
    out.join("\n")
}

fn render_paywall(reading: &Reading) {
    let paywall = &reading.paywall;
    println!("  ┌─────────────────────────────────────────────");
    println!("  │ {} → {}", paywall.price_anchor, paywall.discount_price);
    println!("  │ {}", paywall.urgency);
    for bullet in &paywall.bullets {
        println!("  │  * {bullet}");
    }
    println!("  │ {}", paywall.cta);
    println!("  │ {}", paywall.disclaimer);
    println!("  └─────────────────────────────────────────────");
}

fn render_share(reading: &Reading) {
    let card = &reading.share_card;
    println!("\n  {}", copy::SHARE_TITLE);
    println!("  {} — {}", card.title, card.subtitle);
    println!("  {}", card.tagline);
    println!(
        "  {} {} — ready to paste anywhere.",
        copy::SHARE_PREFIX,
        reading.free.one_liner
    );
    println!("  [{}]", card.cta);
}
