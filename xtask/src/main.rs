use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for psi")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Library modules with their own unit test suites
#[derive(Clone, Copy, ValueEnum)]
enum Module {
    Cpu,
    Memory,
    System,
}

impl Module {
    fn filter(self) -> &'static str {
        match self {
            Module::Cpu => "core::cpu",
            Module::Memory => "core::memory",
            Module::System => "core::system",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        /// Run doc tests only
        #[arg(long)]
        doc: bool,
        /// Run integration tests only (tests/)
        #[arg(long)]
        integration: bool,
        /// Restrict unit tests to these modules (repeatable)
        #[arg(long = "module", short = 'm', value_enum)]
        modules: Vec<Module>,
    },
    /// Run benchmarks
    Bench,
    /// Run the emulator on a BIOS image
    Run {
        /// Path to BIOS file
        bios_path: Option<PathBuf>,
        /// Configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
        /// Number of instructions to execute
        #[arg(short = 'n', long)]
        steps: Option<u64>,
        /// Log every executed instruction
        #[arg(long)]
        trace: bool,
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Check { verbose } => run_check(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Build { release } => run_build(release),
        Commands::Test {
            doc,
            integration,
            modules,
        } => run_test(doc, integration, &modules),
        Commands::Bench => execute_command(&mut cargo(&["bench"])),
        Commands::Run {
            bios_path,
            config,
            steps,
            trace,
            release,
        } => run_emulator(bios_path, config, steps, trace, release),
    }
}

fn cargo(args: &[&str]) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(args);
    cmd
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Build", || run_build(false), verbose)?;
    run_task("Test", || run_test(false, false, &[]), verbose)?;

    report_elapsed("✓ CI passed in", start);
    Ok(())
}

fn run_check(verbose: bool) -> Result<()> {
    println!("{}", "=== Running Quick Checks ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;

    report_elapsed("✓ Checks passed in", start);
    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    let mut cmd = cargo(&["fmt", "--all"]);
    if check {
        cmd.args(["--", "--check"]);
    }
    execute_command(&mut cmd)
}

fn run_clippy(fix: bool) -> Result<()> {
    let mut cmd = cargo(&["clippy", "--workspace", "--all-targets"]);
    if fix {
        cmd.arg("--fix");
    } else {
        cmd.args(["--", "-D", "warnings"]);
    }
    execute_command(&mut cmd)
}

fn run_build(release: bool) -> Result<()> {
    let mut cmd = cargo(&["build"]);
    if release {
        cmd.arg("--release");
    }
    execute_command(&mut cmd)
}

fn run_test(doc: bool, integration: bool, modules: &[Module]) -> Result<()> {
    if doc {
        return execute_command(&mut cargo(&["test", "--doc"]));
    }
    if integration {
        return execute_command(&mut cargo(&["test", "--test", "*"]));
    }
    if modules.is_empty() {
        return execute_command(&mut cargo(&["test", "--workspace"]));
    }

    let mut failed = Vec::new();

    for module in modules {
        let name = module.filter();
        println!("{} Running {} tests...", "→".blue(), name.bold());

        match execute_command(&mut cargo(&["test", "--lib", name])) {
            Ok(_) => println!("{} {} tests passed\n", "✓".green(), name),
            Err(_) => {
                println!("{} {} tests failed\n", "✗".red(), name);
                failed.push(name);
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Module tests failed: {}", failed.join(", "))
    }
}

fn run_emulator(
    bios_path: Option<PathBuf>,
    config: Option<PathBuf>,
    steps: Option<u64>,
    trace: bool,
    release: bool,
) -> Result<()> {
    println!("{}", "=== psi ===".bold().blue());

    if let Some(path) = &bios_path {
        if !path.exists() {
            println!(
                "{} BIOS file not found: {}",
                "✗".red().bold(),
                path.display().to_string().yellow()
            );
            anyhow::bail!("BIOS file not found");
        }
        println!("{} BIOS file: {}", "✓".green(), path.display().to_string().cyan());
    }

    let start = Instant::now();

    let mut cmd = cargo(&["run", "--bin", "psi"]);
    if release {
        cmd.arg("--release");
    }
    cmd.arg("--");
    if let Some(path) = &bios_path {
        cmd.arg(path);
    }
    if let Some(path) = &config {
        cmd.arg("--config").arg(path);
    }
    if let Some(n) = steps {
        cmd.arg("-n").arg(n.to_string());
    }
    if trace {
        cmd.arg("--trace");
    }

    execute_command(&mut cmd)?;

    report_elapsed("✓ Run completed in", start);
    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();

    match task() {
        Ok(_) => {
            let elapsed = start.elapsed();
            println!(
                "{} {}",
                "✓".green().bold(),
                if verbose {
                    format!("({:.2}s)", elapsed.as_secs_f64())
                } else {
                    String::new()
                }
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗".red().bold());
            Err(e)
        }
    }
}

fn report_elapsed(message: &str, start: Instant) {
    println!(
        "\n{} {}",
        message.green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
}

fn execute_command(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("Command failed with exit code: {}", status);
    }

    Ok(())
}
