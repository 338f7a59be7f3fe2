use super::msg_key::MsgKey;
use super::ui_msg::UiMsg;
use super::{EN_MSGS, EN_UI_MSGS, JA_MSGS, JA_UI_MSGS};
use crate::constants;
use std::sync::OnceLock;

/// 言語設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ja,
}

impl Lang {
    /// 環境変数から言語を取得
    /// 優先順位: STRINGS_SYNC_LANG > LANG > デフォルト(en)
    pub fn from_env() -> Self {
        if let Ok(lang) = std::env::var(constants::env::LANG) {
            return Self::parse(&lang);
        }

        // LANGから言語コードを取得（ja_JP.UTF-8 -> ja）
        if let Ok(lang) = std::env::var("LANG") {
            let lang_code = lang.split('_').next().unwrap_or("");
            return Self::parse(lang_code);
        }

        Lang::En
    }

    /// 言語コードをパース
    fn parse(code: &str) -> Self {
        match code {
            "ja" | "ja_JP" => Lang::Ja,
            _ => Lang::En, // 未対応言語は英語にフォールバック
        }
    }

    /// 言語コードを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }
}

/// メッセージマネージャー（HashMap検索、enフォールバック）
pub struct Messages {
    lang: Lang,
}

impl Messages {
    /// 言語設定でMessagesインスタンスを作成
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// メッセージを取得（jaになければenにフォールバック）
    pub fn get(&self, key: MsgKey) -> &'static str {
        match self.lang {
            Lang::En => EN_MSGS.get(&key).unwrap_or(&"[missing message]"),
            Lang::Ja => JA_MSGS
                .get(&key)
                .or_else(|| EN_MSGS.get(&key))
                .unwrap_or(&"[missing message]"),
        }
    }

    /// UIメッセージを取得（jaになければenにフォールバック）
    pub fn ui(&self, key: UiMsg) -> &'static str {
        match self.lang {
            Lang::En => EN_UI_MSGS.get(&key).unwrap_or(&"[missing message]"),
            Lang::Ja => JA_UI_MSGS
                .get(&key)
                .or_else(|| EN_UI_MSGS.get(&key))
                .unwrap_or(&"[missing message]"),
        }
    }

    /// メッセージをフォーマット（プレースホルダー {0}, {1}, ... を置換）
    pub fn fmt(&self, key: MsgKey, args: &[&str]) -> String {
        fill_placeholders(self.get(key), args)
    }

    /// UIメッセージをフォーマット
    pub fn fmt_ui(&self, key: UiMsg, args: &[&str]) -> String {
        fill_placeholders(self.ui(key), args)
    }
}

/// テンプレートの `{n}` を引数で置換する
///
/// 一度の走査でO(n)で処理。範囲外のインデックスや数字以外の `{...}` はそのまま残す。
pub(crate) fn fill_placeholders(template: &str, args: &[&str]) -> String {
    // 予想サイズを確保（テンプレート + 引数の合計長）
    let estimated_size = template.len() + args.iter().map(|s| s.len()).sum::<usize>();
    let mut result = String::with_capacity(estimated_size);

    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        // プレースホルダーの可能性
        let mut digits = String::new();
        let mut lookahead = chars.clone();
        let mut replaced = false;

        for d in lookahead.by_ref() {
            if d.is_ascii_digit() {
                digits.push(d);
                continue;
            }
            if d == '}' && !digits.is_empty() {
                if let Some(arg) = digits.parse::<usize>().ok().and_then(|i| args.get(i)) {
                    result.push_str(arg);
                    replaced = true;
                }
            }
            break;
        }

        if replaced {
            chars = lookahead;
        } else {
            result.push(ch);
        }
    }

    result
}

// グローバルインスタンス
static MESSAGES: OnceLock<Messages> = OnceLock::new();

/// i18nシステムを初期化
pub fn init() {
    // OnceLockで自動初期化されるため、初期化を強制したい場合に呼ぶ
    let _ = messages();
}

/// グローバルなメッセージインスタンスを取得
pub fn messages() -> &'static Messages {
    MESSAGES.get_or_init(|| Messages::new(Lang::from_env()))
}

/// メッセージを取得してフォーマット
pub fn fmt_msg(key: MsgKey, args: &[&str]) -> String {
    messages().fmt(key, args)
}

/// UIメッセージを取得してフォーマット
pub fn fmt_ui_msg(key: UiMsg, args: &[&str]) -> String {
    messages().fmt_ui(key, args)
}

/// UIメッセージを取得
pub fn ui_msg(key: UiMsg) -> &'static str {
    messages().ui(key)
}
