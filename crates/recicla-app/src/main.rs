//! Recicla terminal application - composition root.
//!
//! Ties the workspace crates into one interactive binary:
//! 1. Load configuration from TOML
//! 2. Build the location finder (fixed-position capability when simulated)
//! 3. Run a line-oriented loop: slash commands for theme, impact calculator
//!    and quiz; everything else goes to the recycling chat

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use recicla_chat::{ChatController, TranscriptSink};
use recicla_core::config::ReciclaConfig;
use recicla_core::types::{Message, Sender};
use recicla_core::ThemeMode;
use recicla_geo::{FixedPositionProvider, LocationFinder};
use recicla_impact::ImpactMaterial;
use recicla_quiz::{QuizSession, PERFECT_SCORE_MESSAGE};

mod cli;

const PROMPT: &str = "> ";

const WELCOME: &str = "♻️  Recicla — assistente de reciclagem\n\
                       Digite uma pergunta, ou /ajuda para ver os comandos.";

const HELP: &str = "Comandos:\n  \
                    /tema               alterna entre tema claro e escuro\n  \
                    /impacto <material> <kg>   calcula o impacto da reciclagem\n  \
                    /quiz               inicia o quiz de reciclagem\n  \
                    /ajuda              mostra esta ajuda\n  \
                    /sair               encerra";

/// Prints bot messages to stdout as they are appended.
///
/// User messages are skipped: the user just typed them. The HTML form is for
/// web embeddings and is ignored here.
struct ConsoleSink;

impl TranscriptSink for ConsoleSink {
    fn append_message(&self, message: &Message, _rendered_html: &str) {
        if message.sender == Sender::Bot {
            println!("\n{}\n", message.text);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = ReciclaConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Recicla v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Location capability.
    let finder = if config.location.simulate || args.simulate_location {
        tracing::info!(
            latitude = config.location.latitude,
            longitude = config.location.longitude,
            "Simulating position capability"
        );
        LocationFinder::with_provider(Arc::new(FixedPositionProvider::new(
            config.location.latitude,
            config.location.longitude,
        )))
    } else {
        LocationFinder::new()
    };

    let controller = ChatController::with_response_delay(
        Arc::new(finder),
        Arc::new(ConsoleSink),
        Duration::from_millis(config.chat.response_delay_ms),
    );

    println!("{WELCOME}");
    print_theme(config.theme.mode);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input.split_whitespace().next() {
            Some("/sair") => break,
            Some("/ajuda") => println!("{HELP}"),
            Some("/tema") => toggle_theme(&mut config, &config_file),
            Some("/impacto") => run_impact(input),
            Some("/quiz") => run_quiz(&mut lines).await?,
            _ => {
                if let Some(handle) = controller.submit(input).await {
                    // Wait for the reply (including deferred lookups) so the
                    // prompt returns after the bot finishes.
                    handle.await?;
                }
            }
        }
    }

    println!("Até logo! 🌱");
    Ok(())
}

fn print_theme(mode: ThemeMode) {
    let label = match mode {
        ThemeMode::Light => "claro",
        ThemeMode::Dark => "escuro",
    };
    println!("Tema atual: {label} ({})", mode.as_str());
}

fn toggle_theme(config: &mut ReciclaConfig, config_file: &Path) {
    config.theme.mode = config.theme.mode.toggled();
    print_theme(config.theme.mode);
    if let Err(e) = config.save(config_file) {
        tracing::warn!(error = %e, "Failed to persist theme preference");
    }
}

fn run_impact(input: &str) {
    let mut parts = input.split_whitespace().skip(1);
    let (Some(material), Some(quantity)) = (parts.next(), parts.next()) else {
        println!("Uso: /impacto <material> <kg>");
        print_impact_materials();
        return;
    };

    let material = match ImpactMaterial::from_keyword(material) {
        Ok(material) => material,
        Err(e) => {
            println!("{e}");
            print_impact_materials();
            return;
        }
    };
    let quantity: f64 = match quantity.parse() {
        Ok(q) => q,
        Err(_) => {
            println!("Por favor, digite uma quantidade válida maior que zero.");
            return;
        }
    };

    match recicla_impact::estimate(material, quantity) {
        Ok(est) => {
            println!("\n🌍 Impacto de reciclar {:.1} kg:", est.quantity_kg);
            println!("  Redução de emissões: {:.1}%", est.reduction_percent);
            println!("  Energia economizada: {:.0}%", est.energy_saved_percent);
            for line in est.summary_lines() {
                println!("  {line}");
            }
            println!();
        }
        Err(e) => println!("{e}"),
    }
}

fn print_impact_materials() {
    let keywords: Vec<&str> = ImpactMaterial::ALL.iter().map(|m| m.keyword()).collect();
    println!("Materiais: {}", keywords.join(", "));
}

async fn run_quiz(lines: &mut Lines<BufReader<Stdin>>) -> std::io::Result<()> {
    let mut session = QuizSession::new();
    println!("\n🎮 Quiz da Reciclagem! Responda com o número da opção.\n");

    while let Some(question) = session.current_question() {
        println!("{} — {}", session.progress_label(), question.question);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}) {}", index + 1, option.text);
        }

        print!("{PROMPT}");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            println!("Quiz interrompido.");
            return Ok(());
        };

        let choice = match line.trim().parse::<usize>() {
            Ok(n) if (1..=question.options.len()).contains(&n) => n - 1,
            _ => {
                println!("Por favor, selecione uma resposta!");
                continue;
            }
        };

        // Index already validated against this question's options.
        if let Ok(outcome) = session.answer(choice) {
            if outcome.correct {
                println!("✅ Correto!\n");
            } else {
                println!("❌ Incorreto.\n");
            }
        }
    }

    if let Some(results) = session.results() {
        println!(
            "{} {} — {}",
            results.grade.icon(),
            results.grade.title(),
            results.score_label()
        );
        println!("{}\n", results.grade.message());

        if results.is_perfect() {
            println!("{PERFECT_SCORE_MESSAGE}\n");
        } else {
            for wrong in &results.wrong_answers {
                println!("❌ {}", wrong.question);
                println!("   Sua resposta: {}", wrong.user_answer);
                println!("   ✅ Resposta correta: {}", wrong.correct_answer);
                println!("   💡 {}\n", wrong.tip);
            }
        }
    }
    Ok(())
}
