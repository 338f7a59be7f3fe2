use std::io::Write;
use strings_sync::i18n::{self, fmt_ui_msg, UiMsg};
use strings_sync::{constants, log, SyncConfig};

fn main() {
    // 国際化システムとログを初期化
    i18n::init();
    log::init_from_env();

    // 引数は受け付けない（設定はstrings-sync.tomlのみ）
    let config = match SyncConfig::find_and_load() {
        Ok((config, Some(path))) => {
            log::debug(format_args!(
                "{}",
                fmt_ui_msg(UiMsg::ConfigLoaded, &[&path.display().to_string()])
            ));
            config
        }
        Ok((config, None)) => {
            log::debug(format_args!(
                "{}",
                fmt_ui_msg(UiMsg::ConfigDefault, &[constants::CONFIG_FILE_NAME])
            ));
            config
        }
        Err(e) => {
            eprint!("{}", e.full());
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match strings_sync::run(&config, &mut out) {
        Ok(report) => {
            let _ = out.flush();
            log::debug(format_args!(
                "{} keys added across {} targets",
                report.total_added(),
                report.targets.len()
            ));
        }
        Err(e) => {
            let _ = out.flush();
            eprint!("{}", e.full());
            std::process::exit(1);
        }
    }
}
