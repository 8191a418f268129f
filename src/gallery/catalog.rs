// SPDX-License-Identifier: MPL-2.0
//! The hand-authored photo list shown on startup.

use std::fmt;

/// Stable identifier of a photo within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u64);

impl PhotoId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A captioned photograph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub id: PhotoId,
    /// Root-relative locator (`/photos/1.jpg`) or an absolute file path.
    pub url: String,
    pub caption: String,
}

impl PhotoRecord {
    pub fn new(id: PhotoId, url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            caption: caption.into(),
        }
    }
}

const CAPTIONS: [&str; 35] = [
    "Мои первые дни",
    "Я с мамой",
    "Я с папой",
    "Семейные моменты",
    "Опять с папой",
    "Острый козырёк",
    "Мне один месяц",
    "Тут мне два месяца",
    "А тут три месяца",
    "Отметка в четыре месяца пройдена))",
    "Пять месяцев",
    "Ура! Мне пол года",
    "Семь месяцев",
    "Восемь месяцев",
    "Восемь месяцев позади",
    "Ура! Десять месяцев",
    "Одиннадцать месяцев",
    "Мне один годик",
    "Би-Би",
    "Кормлю голубей",
    "Учимся улыбаться",
    "Пью водичку",
    "Что они от меня хотят ?!",
    "Это моя подружка Теона",
    "Тут я балдею",
    "Улыбаемся )))",
    "Собираюсь на прогулку",
    "Устал...",
    "У бабушки на работе",
    "Работу работаем",
    "С бабушкой",
    "Это я на самокате",
    "Я с бабушкой и папой",
    "Мои кулинарные таланты",
    "С любимой бабушкой",
];

/// Number of records in the authored catalog.
pub const CATALOG_LEN: usize = CAPTIONS.len();

/// Returns the authored catalog: ids `1..=35`, locators `/photos/N.jpg`.
#[must_use]
pub fn catalog() -> Vec<PhotoRecord> {
    CAPTIONS
        .iter()
        .enumerate()
        .map(|(index, caption)| {
            let n = index as u64 + 1;
            PhotoRecord::new(PhotoId::new(n), format!("/photos/{n}.jpg"), *caption)
        })
        .collect()
}
