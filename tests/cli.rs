mod common;
use common::*;

#[cfg(test)]
mod cli
{
    use std::ffi::OsString;

    use super::*;
    use clap::Parser;
    use othellomind::prelude::*;

    #[test]
    fn defaults()
    {
        let _setup = setup::setup();
        let options = CliOptions::parse_from(["othellomind"]);
        assert_eq!(options.depth, 3);
        assert_eq!(options.mode, Mode::Play);
        assert_eq!(options.passes(), PassPolicy::ConsumesPly);
        assert_eq!(options.log_level, "info");
    }

    #[test]
    fn best_move_on_opening()
    {
        let _setup = setup::setup();
        let options = CliOptions::parse_from(["othellomind", "-d", "1", "-m", "best-move", "--reference", "--free-passes"]);
        assert_eq!(options.passes(), PassPolicy::Free);

        let mut runner = Runner::new(options).unwrap();
        assert_eq!(runner.session().best_move(1), Some(Move::new(2, 3)));
        assert!(runner.run().is_ok());
    }

    #[test]
    fn plays_loaded_position()
    {
        let _setup = setup::setup();
        let path = std::env::temp_dir().join(format!("othellomind-cli-{}.txt", std::process::id()));
        let position = PositionString::new(Player::White, templates::board(templates::WHITE_MUST_PASS));
        std::fs::write(&path, position.to_string()).unwrap();

        let args: Vec<OsString> = vec!["othellomind".into(), path.clone().into_os_string(), "-d".into(), "2".into()];
        let options = CliOptions::parse_from(args);
        let mut runner = Runner::new(options).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(runner.run().is_ok());
        assert_eq!(runner.session().winner(), GameState::BlackWins);
    }

    #[test]
    fn rejects_deep_searches()
    {
        let _setup = setup::setup();
        let options = CliOptions::parse_from(["othellomind", "-d", "65"]);
        let err = Runner::new(options).err().unwrap();
        assert_eq!(err.kind, Kind::InvalidOption);
    }
}
