use std::fmt;

use serde::{Deserialize, Serialize};

/// National holidays of Japan, plus the two kinds of derived rest day.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum JapaneseHoliday {
    NewYearsDay,
    ComingOfAgeDay,
    NationalFoundationDay,
    EmperorsBirthday,
    VernalEquinoxDay,
    ShowaDay,
    ConstitutionMemorialDay,
    GreeneryDay,
    ChildrensDay,
    MarineDay,
    MountainDay,
    RespectForTheAgedDay,
    AutumnalEquinoxDay,
    CitizensHoliday,
    SportsDay,
    CultureDay,
    LaborThanksgivingDay,
    SubstituteHoliday
}

impl JapaneseHoliday {
    pub fn japanese_name(&self) -> &'static str {
        match self {
            JapaneseHoliday::NewYearsDay => "元日",
            JapaneseHoliday::ComingOfAgeDay => "成人の日",
            JapaneseHoliday::NationalFoundationDay => "建国記念の日",
            JapaneseHoliday::EmperorsBirthday => "天皇誕生日",
            JapaneseHoliday::VernalEquinoxDay => "春分の日",
            JapaneseHoliday::ShowaDay => "昭和の日",
            JapaneseHoliday::ConstitutionMemorialDay => "憲法記念日",
            JapaneseHoliday::GreeneryDay => "みどりの日",
            JapaneseHoliday::ChildrensDay => "こどもの日",
            JapaneseHoliday::MarineDay => "海の日",
            JapaneseHoliday::MountainDay => "山の日",
            JapaneseHoliday::RespectForTheAgedDay => "敬老の日",
            JapaneseHoliday::AutumnalEquinoxDay => "秋分の日",
            JapaneseHoliday::CitizensHoliday => "国民の休日",
            JapaneseHoliday::SportsDay => "スポーツの日",
            JapaneseHoliday::CultureDay => "文化の日",
            JapaneseHoliday::LaborThanksgivingDay => "勤労感謝の日",
            JapaneseHoliday::SubstituteHoliday => "振替休日"
        }
    }
}

impl fmt::Display for JapaneseHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.japanese_name())
    }
}
