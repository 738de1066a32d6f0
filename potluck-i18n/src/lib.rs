#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PARTICIPANT: &str = "参加者";
    pub const TOTAL_SPENT: &str = "支出合計";
    pub const SHARE: &str = "負担額";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const TOTAL_EXPENSES: &str = "総額";
    pub const NOTHING_TO_SETTLE: &str = "精算は不要です";
    pub const NO_PARTICIPANTS_FOUND: &str = "参加者が見つかりません";
    pub const EVENT_ID_REQUIRED: &str = "イベントIDが必要です";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const TOTAL_SPENT: &str = "Total Spent";
    pub const SHARE: &str = "Share";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TOTAL_EXPENSES: &str = "Total";
    pub const NOTHING_TO_SETTLE: &str = "Nothing to settle";
    pub const NO_PARTICIPANTS_FOUND: &str = "No participants found";
    pub const EVENT_ID_REQUIRED: &str = "Event ID is required";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn event_not_found(event_id: impl std::fmt::Display) -> String {
    format!("イベントが見つかりません: {event_id}")
}

#[cfg(not(feature = "ja"))]
pub fn event_not_found(event_id: impl std::fmt::Display) -> String {
    format!("Event not found: {event_id}")
}

#[cfg(feature = "ja")]
pub fn unsupported_currency_scale(scale: u32, max_supported: u32) -> String {
    format!("通貨の小数桁数 {scale} には対応していません (最大 {max_supported})")
}

#[cfg(not(feature = "ja"))]
pub fn unsupported_currency_scale(scale: u32, max_supported: u32) -> String {
    format!("Currency scale {scale} is not supported (max {max_supported})")
}

#[cfg(feature = "ja")]
pub fn amount_overflow(stage: &str) -> String {
    format!("金額が大きすぎて計算できません ({stage})")
}

#[cfg(not(feature = "ja"))]
pub fn amount_overflow(stage: &str) -> String {
    format!("Amount too large to split ({stage} overflowed)")
}

pub struct EventHeadingMessage<'a> {
    name: &'a str,
    date: &'a str,
    participant_count: usize,
}

pub fn event_heading<'a>(
    name: &'a str,
    date: &'a str,
    participant_count: usize,
) -> EventHeadingMessage<'a> {
    EventHeadingMessage {
        name,
        date,
        participant_count,
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for EventHeadingMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) 参加者 {} 名",
            self.name, self.date, self.participant_count
        )
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for EventHeadingMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.participant_count == 1 {
            "participant"
        } else {
            "participants"
        };
        write!(
            f,
            "{} ({}), {} {noun}",
            self.name, self.date, self.participant_count
        )
    }
}
