// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat, ViewKind, ViewSelector};
use crate::progress::CliProgress;
use crate::{file, runner};

pub enum Command {
    Help,
    Run(CliArgs),
}

pub struct CliArgs {
    pub options: AppOptions,
    /// `-o` given: write files instead of printing.
    pub write_files: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(args) => execute(&args),
    }
}

fn execute(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let opts = &args.options;
    let mut progress = CliProgress::default();
    let reports = runner::run(&opts.run, Some(&mut progress))?;
    let views = opts.run.views.views();

    if args.write_files {
        for path in file::export_reports(&reports, &opts.export, &views)? {
            println!("Wrote {}", path.display());
        }
    } else {
        for (i, view) in views.iter().enumerate() {
            if i > 0 { println!(); }
            println!("# {}", view.title());
            print!("{}", file::table_text(reports.get(*view), &opts.export));
        }
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut write_files = false;
    let mut have_data = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-d" | "--data" => {
                options.run.dataset = PathBuf::from(args.next().ok_or("Missing dataset path")?);
                have_data = true; }
            "-a" | "--advertiser" => options.run.advertiser = args.next().ok_or("Missing advertiser name")?,
            "-r" | "--rules" => options.run.rules = PathBuf::from(args.next().ok_or("Missing rules path")?),
            "-c" | "--cities" => options.run.cities_dir = PathBuf::from(args.next().ok_or("Missing cities dir")?),
            "--view" => {
                let v = args.next().ok_or("Missing value for --view")?;
                options.run.views = if v.eq_ignore_ascii_case("all") {
                    ViewSelector::All
                } else {
                    ViewSelector::One(ViewKind::parse(&v).ok_or_else(|| format!("Unknown view: {}", v))?)
                };}
            "-o" | "--out" => {
                options.export.set_out_dir(&args.next().ok_or("Missing output dir")?);
                write_files = true; }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?;}
            "--no-headers" => options.export.include_headers = false,
            "--drop-col" => {
                let v: usize = args.next().ok_or("Missing column index")?.parse()?;
                options.export.drop_column = Some(v); }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !have_data {
        return Err("Specify --data <path>".into());
    }
    Ok(Command::Run(CliArgs { options, write_files }))
}
