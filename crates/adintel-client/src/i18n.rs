//! User-facing strings in English and Japanese

/// Display language for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Resolve a BCP 47 language tag such as `ja-JP` or `en-US`.
    /// Anything that isn't Japanese falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ja") {
            Locale::Ja
        } else {
            Locale::En
        }
    }

    pub fn text(self, message: Message) -> String {
        match self {
            Locale::En => english(message),
            Locale::Ja => japanese(message),
        }
    }
}

/// Message keys used across the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NetworkError,
    TimeoutError,
    HttpError(u16),
    Unauthorized,
    DecodeError,
    ValidationError,
    Loading,
    NoData,
    Dismiss,
    Saved,
    Removed,
}

fn english(message: Message) -> String {
    match message {
        Message::NetworkError => "Could not reach the server. Check your connection.".to_string(),
        Message::TimeoutError => "The server took too long to respond.".to_string(),
        Message::HttpError(status) => format!("The server returned an error (HTTP {status})"),
        Message::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
        Message::DecodeError => "Received an unexpected response from the server.".to_string(),
        Message::ValidationError => "Please check the form".to_string(),
        Message::Loading => "Loading...".to_string(),
        Message::NoData => "No data yet.".to_string(),
        Message::Dismiss => "Dismiss".to_string(),
        Message::Saved => "Saved.".to_string(),
        Message::Removed => "Removed.".to_string(),
    }
}

fn japanese(message: Message) -> String {
    match message {
        Message::NetworkError => {
            "サーバーに接続できませんでした。接続を確認してください。".to_string()
        }
        Message::TimeoutError => "サーバーの応答がタイムアウトしました。".to_string(),
        Message::HttpError(status) => format!("サーバーでエラーが発生しました (HTTP {status})"),
        Message::Unauthorized => {
            "セッションの有効期限が切れました。再度ログインしてください。".to_string()
        }
        Message::DecodeError => "サーバーから予期しない応答を受信しました。".to_string(),
        Message::ValidationError => "入力内容を確認してください".to_string(),
        Message::Loading => "読み込み中...".to_string(),
        Message::NoData => "データがありません。".to_string(),
        Message::Dismiss => "閉じる".to_string(),
        Message::Saved => "保存しました。".to_string(),
        Message::Removed => "削除しました。".to_string(),
    }
}
