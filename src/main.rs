use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use freakyfetch::cli::Cli;
use freakyfetch::display::image::{
    default_image_path, error_panel, render_image, IMAGE_COLUMNS, IMAGE_HEIGHT, IMAGE_ROWS,
};
use freakyfetch::display::style::cursor_up;
use freakyfetch::display::{
    reconcile_cursor, render_info_panel, template, LogoLayout, TemplateSearch, LOGO_HEIGHT,
};
use freakyfetch::{cache, freakify, utils, DisplayConfig, Result, SystemInfo};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("freakyfetch: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("version {}", env!("CARGO_PKG_VERSION"));

    let mut info = SystemInfo::default();
    let mut config = DisplayConfig::load(cli.config.as_deref(), &mut info);
    if cfg!(windows) {
        config.show.pkgs = false;
    }

    if cli.list {
        let search = TemplateSearch::for_os(&info.os_name);
        for name in search.available() {
            println!("{}", name);
        }
        return Ok(());
    }

    if freakyfetch::gather(&config, &mut info, cli.read_cache, cli.write_cache) {
        if let Err(err) = cache::write(&info) {
            log::error!("could not write cache: {}", err);
        }
    }

    if let Some(distro) = &cli.distro {
        info.os_name.set(distro);
    }
    if let Some(image) = &cli.image {
        config.show_image = true;
        if let Some(path) = image {
            info.image_path.set(&shellexpand::tilde(path));
        }
    }

    let layout = LogoLayout::for_os(&info.os_name);
    freakify::freakify_all(&mut info);

    let (logo, logo_lines) = if config.show_image {
        (render_logo_image(&info), IMAGE_HEIGHT)
    } else {
        let search = TemplateSearch::for_os(&info.os_name);
        let logo = template::render(&search, &info.os_name)?;
        (logo.text, logo.line_count)
    };

    info.terminal = utils::terminal::terminal_size();
    log::debug!("terminal {:?}", info.terminal);
    let panel = render_info_panel(&config, &info, info.terminal.cols, &layout);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}{}", logo, cursor_up(logo_lines))?;
    write!(out, "{}", panel.text)?;
    write!(out, "{}", reconcile_cursor(LOGO_HEIGHT, panel.line_count))?;
    out.flush()?;

    log::info!("done, {} info lines", panel.line_count);
    Ok(())
}

fn render_logo_image(info: &SystemInfo) -> String {
    let path = if info.image_path.is_empty() {
        default_image_path(&info.os_name)
    } else {
        Path::new(info.image_path.as_str()).to_path_buf()
    };

    match render_image(&path, IMAGE_COLUMNS, IMAGE_ROWS) {
        Ok(image) => image,
        Err(err) => {
            log::warn!("{}", err);
            error_panel()
        }
    }
}
