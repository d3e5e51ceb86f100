//! Configuration tests - JSON loading, validation and the palette

use std::io::Write;

use blockfall::core::{ConfigError, EngineConfig, EngineError, Game, Palette};
use blockfall::types::PieceColor;

#[test]
fn test_empty_json_is_default() {
    let config = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_invalid_dimensions() {
    let err = EngineConfig::from_json_str(r#"{ "board_height": 65 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDimensions { width: 10, height: 65 }));
}

#[test]
fn test_zero_arr_rejected() {
    let err = EngineConfig::from_json_str(r#"{ "arr_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTiming { field: "arr_ms" }));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = EngineConfig::from_json_str("{ board_width: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("blockfall-config-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "fall_interval_ms": 250, "seed": 42 }}"#).unwrap();
    }
    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.fall_interval_ms, 250);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = EngineConfig::load("/nonexistent/blockfall.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_game_new_surfaces_config_error() {
    let config = EngineConfig {
        fall_interval_ms: 0,
        ..EngineConfig::default()
    };
    let err = Game::new(&config).unwrap_err();
    assert!(matches!(err, EngineError::Config(ConfigError::InvalidTiming { .. })));
}

#[test]
fn test_custom_board_from_config() {
    let config = EngineConfig {
        board_width: 8,
        board_height: 12,
        seed: Some(3),
        ..EngineConfig::default()
    };
    let mut game = Game::new(&config).unwrap();
    game.start();
    assert_eq!(game.board().width(), 8);
    assert_eq!(game.board().height(), 12);
    assert_eq!(game.active().unwrap().anchor().row, 12);
}

#[test]
fn test_palette_lookup() {
    let glyphs: Vec<char> = "OSZTLJI.".chars().collect();
    let palette = Palette::new(glyphs).unwrap();
    assert_eq!(*palette.get(PieceColor::Yellow), 'O');
    assert_eq!(*palette.get(PieceColor::Cyan), 'I');
    assert_eq!(*palette.get(PieceColor::Gray), '.');

    let err = Palette::new(vec![0u8; 3]).unwrap_err();
    assert!(matches!(err, ConfigError::PaletteTooSmall { expected: 8, actual: 3 }));
}
