//! `.strings` 形式のパーサー
//!
//! `"<key>" = "<value>";` のエントリを本文中から拾い出します。
//! 文法に合わない部分（コメント、空行、壊れたエントリ）は黙って読み飛ばし、
//! エラーにはしません。
//!
//! クォート内の `\"` はエスケープとして扱い、区切りとはみなしません。
//! ただしエスケープ優先で読み進めてもエントリが完成しない場合は、
//! 直近の `\"` の `"` から順に閉じクォートとして試します。

use crate::{new_hashmap, HashMap};

/// キーと値の組
///
/// キー・値ともにファイル上の表記のまま保持する（エスケープは解釈しない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub struct PairParser {
    input: Vec<char>,
    pos: usize,
}

impl PairParser {
    pub fn new(input: &str) -> Self {
        PairParser {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.input.get(pos).copied()
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while let Some(ch) = self.char_at(pos) {
            if ch.is_whitespace() {
                pos += 1;
            } else {
                break;
            }
        }
        pos
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }

    /// 閉じクォートの候補位置を試す順に返す
    ///
    /// `start` は開きクォートの直後。先頭はエスケープされていない最初の `"`、
    /// 続いて途中の `\"` の `"` を後ろから。
    fn closing_candidates(&self, start: usize) -> Vec<usize> {
        let mut escaped = Vec::new();
        let mut unescaped = None;
        let mut pos = start;

        while let Some(ch) = self.char_at(pos) {
            match ch {
                '\\' if self.char_at(pos + 1) == Some('"') => {
                    escaped.push(pos + 1);
                    pos += 2;
                }
                '"' => {
                    unescaped = Some(pos);
                    break;
                }
                _ => pos += 1,
            }
        }

        unescaped.into_iter().chain(escaped.into_iter().rev()).collect()
    }

    /// `open`（キーの開きクォート）からエントリ全体を照合する
    ///
    /// 成功時はエントリと `;` の直後の位置を返す。
    fn match_entry(&self, open: usize) -> Option<(Entry, usize)> {
        let key_start = open + 1;

        for key_end in self.closing_candidates(key_start) {
            // \s* = \s* "
            let mut pos = self.skip_whitespace(key_end + 1);
            if self.char_at(pos) != Some('=') {
                continue;
            }
            pos = self.skip_whitespace(pos + 1);
            if self.char_at(pos) != Some('"') {
                continue;
            }

            let value_start = pos + 1;
            for value_end in self.closing_candidates(value_start) {
                // \s* ;
                let semi = self.skip_whitespace(value_end + 1);
                if self.char_at(semi) == Some(';') {
                    let entry = Entry {
                        key: self.slice(key_start, key_end),
                        value: self.slice(value_start, value_end),
                    };
                    return Some((entry, semi + 1));
                }
            }
        }

        None
    }

    /// 次のエントリを読む（無ければ None）
    pub fn next_entry(&mut self) -> Option<Entry> {
        while self.pos < self.input.len() {
            if self.input[self.pos] == '"' {
                if let Some((entry, end)) = self.match_entry(self.pos) {
                    self.pos = end;
                    return Some(entry);
                }
            }
            self.pos += 1;
        }
        None
    }

    /// 出現順にすべてのエントリを読む
    pub fn parse_all(&mut self) -> Vec<Entry> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next_entry() {
            entries.push(entry);
        }
        entries
    }
}

impl Iterator for PairParser {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.next_entry()
    }
}

/// テキストからエントリを出現順に取り出す
pub fn parse_pairs(text: &str) -> Vec<Entry> {
    PairParser::new(text).parse_all()
}

/// パース済みのキー表
///
/// キーの順序は最初に現れた位置、値は最後に現れたものが有効。
#[derive(Debug, Clone, Default)]
pub struct StringsTable {
    order: Vec<String>,
    values: HashMap<String, String>,
}

impl StringsTable {
    pub fn new() -> Self {
        StringsTable {
            order: Vec::new(),
            values: new_hashmap(),
        }
    }

    pub fn parse(text: &str) -> Self {
        PairParser::new(text).collect()
    }

    pub fn insert(&mut self, entry: Entry) {
        if !self.values.contains_key(&entry.key) {
            self.order.push(entry.key.clone());
        }
        self.values.insert(entry.key, entry.value);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// キーを順序通りに列挙
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl FromIterator<Entry> for StringsTable {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut table = StringsTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
