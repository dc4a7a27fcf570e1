use simplelog::{Color, Config, ConfigBuilder, Level, LevelFilter, TermLogger, TerminalMode, ColorChoice};

fn term_config() -> Config { 
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build()
}

/// Installs a terminal logger for the whole process.
/// Fails if a logger has already been installed.
pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> { 
    TermLogger::init(
        l,
        term_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}
