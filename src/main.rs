//! Blog Pessoal - A terminal client for the Blog Pessoal REST API
#![allow(clippy::uninlined_format_args)]

use std::io::Write;

use anyhow::Result;
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use blog_pessoal::api::{BlogApi, BlogClient};
use blog_pessoal::{Config, Route, Session, Shell, UsuarioLogin};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    match parse_args()? {
        Command::Run(route) => blog_pessoal::app::run(route),
        Command::Temas => Runtime::new()?.block_on(temas_cli()),
        Command::Postagens { limit } => Runtime::new()?.block_on(postagens_cli(limit)),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run(Route),
    Temas,
    Postagens { limit: Option<usize> },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run(Route::Root));
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "temas" => Ok(Command::Temas),
        "postagens" => {
            let limit = match args.iter().position(|a| a == "--limit" || a == "-l") {
                Some(i) => Some(
                    args.get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("Missing value for --limit"))?
                        .parse()?,
                ),
                None => None,
            };
            Ok(Command::Postagens { limit })
        }
        path if path.starts_with('/') => Route::parse(path)
            .map(Command::Run)
            .ok_or_else(|| anyhow::anyhow!("Unknown screen: {path}")),
        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'blog-pessoal --help' for usage"
        )),
    }
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
✎ Blog Pessoal - A terminal client for the Blog Pessoal API

USAGE:
    blog-pessoal                       Launch TUI
    blog-pessoal <PATH>                Launch TUI at a screen (e.g. /postagens)
    blog-pessoal [COMMAND]

COMMANDS:
    temas                              Log in and list every theme
    postagens [OPTIONS]                Log in and list posts
      Options:
        -l, --limit <n>                Only show the first n posts

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Menu
      1-4           Home / Postagens / Temas / Cadastrar postagem
      x             Log out
      Alt+key       Menu from any screen

    Lists
      j/↓ k/↑       Move
      Enter         Edit post
      n             New post
      r             Refresh

    Forms
      Tab           Next field
      Ctrl+S        Send post
      Esc           Back

    General
      t / F2        Change theme
      ? / F1        Help
      q / Ctrl+C    Quit

ENVIRONMENT:
    {}      Backend URL override
    RUST_LOG                   Log filter (logs go to stderr)

CONFIG:
    {}
"#,
        blog_pessoal::LOGO,
        blog_pessoal::config::API_URL_ENV,
        config_path
    );
}

fn print_version() {
    println!("blog-pessoal {}", blog_pessoal::VERSION);
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print and drop whatever notices the shell collected
fn flush_toasts(shell: &mut Shell) {
    for toast in shell.toasts.iter() {
        eprintln!("{} {}", toast.kind.icon(), toast.message);
    }
    while !shell.toasts.is_empty() {
        shell.toasts.dismiss();
    }
}

/// Log in interactively; returns the client and a live session
async fn login_cli() -> Result<(BlogClient, Session)> {
    let config = Config::load()?;
    let client = BlogClient::new(&config.api_url, config.request_timeout())?;

    let usuario = prompt("Usuário")?;
    let senha = prompt("Senha")?;

    let mut session = Session::new();
    let mut shell = Shell::new(Route::Login, config.toast_duration());
    let ok = session
        .handle_login(
            &client,
            &UsuarioLogin::credentials(usuario.trim(), &senha),
            &mut shell,
        )
        .await;
    flush_toasts(&mut shell);

    if !ok {
        anyhow::bail!("login failed");
    }
    Ok((client, session))
}

async fn temas_cli() -> Result<()> {
    let (client, session) = login_cli().await?;
    let temas = client.listar_temas(session.token()).await?;

    println!("\nTemas ({})", temas.len());
    println!("{}", "─".repeat(60));
    for tema in temas {
        println!("{:>4}  {}", tema.id, tema.descricao);
    }

    Ok(())
}

async fn postagens_cli(limit: Option<usize>) -> Result<()> {
    let (client, session) = login_cli().await?;
    let postagens = client.listar_postagens(session.token()).await?;
    let total = postagens.len();

    println!("\nPostagens ({total})");
    println!("{}", "─".repeat(60));
    for postagem in postagens.into_iter().take(limit.unwrap_or(total)) {
        println!("\n{}", postagem.titulo);
        println!("{}", textwrap::fill(&postagem.texto, 60));
        let mut meta = Vec::new();
        if !postagem.tema_descricao().is_empty() {
            meta.push(format!("#{}", postagem.tema_descricao()));
        }
        if !postagem.autor().is_empty() {
            meta.push(format!("por {}", postagem.autor()));
        }
        let data = postagem.data_formatada();
        if !data.is_empty() {
            meta.push(data);
        }
        println!("{}", meta.join(" · "));
    }

    Ok(())
}
