//! 先頭N行の一括選択ポップオーバー

use crate::types::Artwork;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelect {
    open: bool,
    count: usize,
}

impl BulkSelect {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 入力欄の表示値（0は空欄）
    pub fn input_value(&self) -> String {
        if self.count == 0 {
            String::new()
        } else {
            self.count.to_string()
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// 数値入力を反映。空・負数・整数でない入力は0
    pub fn set_count_input(&mut self, input: &str) {
        self.count = parse_count(input);
    }

    /// 先頭`count`件を返して閉じる。ページ件数を超える指定はページ全体
    pub fn submit(&mut self, records: &[Artwork]) -> Vec<Artwork> {
        self.open = false;
        first_n(records, self.count)
    }
}

pub fn parse_count(input: &str) -> usize {
    input.trim().parse::<usize>().unwrap_or(0)
}

pub fn first_n(records: &[Artwork], n: usize) -> Vec<Artwork> {
    records.iter().take(n).cloned().collect()
}
