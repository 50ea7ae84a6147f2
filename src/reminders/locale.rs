/// Localized reminder strings
use std::fmt;

/// Languages a guild can pick for its reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, poise::ChoiceParameter)]
pub enum Language {
    #[name = "English"]
    En,
    #[name = "Bahasa Indonesia"]
    Id,
    #[name = "日本語"]
    Jp,
    #[name = "한국어"]
    Kr,
    #[name = "中文"]
    Zh,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Id,
        Language::Jp,
        Language::Kr,
        Language::Zh,
    ];

    /// Code persisted in the guild configuration
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
            Language::Jp => "JP",
            Language::Kr => "KR",
            Language::Zh => "ZH",
        }
    }

    /// Parse a stored language code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every string a reminder or the overview embed needs.
///
/// `sahoor_note` takes `{imsak}`, `iftar_note` takes `{time}` and the two
/// work bodies take `{start}` and `{end}`.
#[derive(Debug)]
pub struct Locale {
    pub sahoor_label: &'static str,
    pub sahoor_note: &'static str,
    pub iftar_label: &'static str,
    pub iftar_note: &'static str,
    pub work_ramadan_body: &'static str,
    pub work_body: &'static str,
    pub daily_header: &'static str,
    pub standup: &'static str,
    pub standup_ramadan: &'static str,
    pub lunch: &'static str,
    pub love_note: &'static str,
    pub friday_prayer: &'static str,
    pub holidays_header: &'static str,
    pub ramadan_header: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub no_reminders: &'static str,
}

impl Locale {
    pub fn get(language: Language) -> &'static Locale {
        match language {
            Language::En => &EN,
            Language::Id => &ID,
            Language::Jp => &JP,
            Language::Kr => &KR,
            Language::Zh => &ZH,
        }
    }

    /// Look up a stored code, falling back to English for anything unknown
    pub fn for_code(code: &str) -> &'static Locale {
        Self::get(Language::from_code(code).unwrap_or(Language::En))
    }
}

static EN: Locale = Locale {
    sahoor_label: "🌙 **Time for sahoor!** Wake up and eat before dawn.",
    sahoor_note: "Imsak at {imsak}. May your fast go smoothly today.",
    iftar_label: "🌇 **It's time to break your fast!**",
    iftar_note: "Iftar at {time}. Enjoy your meal!",
    work_ramadan_body: "Ramadan working hours today: {start} - {end}.",
    work_body: "Working hours today: {start} - {end}.",
    daily_header: "📋 Today's reminders",
    standup: "Daily standup",
    standup_ramadan: "Daily standup (Ramadan schedule)",
    lunch: "Lunch break",
    love_note: "Drink some water and take care of yourself 💙",
    friday_prayer: "Friday prayer break",
    holidays_header: "🎌 Upcoming holidays",
    ramadan_header: "🌙 Ramadan today",
    title: "⏰ Daily Reminders",
    description: "This channel will receive national holiday greetings, Ramadan sahoor and iftar calls, and workday start/end reminders (Asia/Jakarta time).",
    no_reminders: "No reminders today. Enjoy your day off!",
};

static ID: Locale = Locale {
    sahoor_label: "🌙 **Waktunya sahur!** Ayo bangun dan makan sebelum subuh.",
    sahoor_note: "Imsak pukul {imsak}. Semoga puasanya lancar hari ini.",
    iftar_label: "🌇 **Waktunya berbuka puasa!**",
    iftar_note: "Berbuka pukul {time}. Selamat menikmati hidangan!",
    work_ramadan_body: "Jam kerja Ramadan hari ini: {start} - {end}.",
    work_body: "Jam kerja hari ini: {start} - {end}.",
    daily_header: "📋 Pengingat hari ini",
    standup: "Daily standup",
    standup_ramadan: "Daily standup (jadwal Ramadan)",
    lunch: "Istirahat makan siang",
    love_note: "Jangan lupa minum air dan jaga kesehatan 💙",
    friday_prayer: "Istirahat salat Jumat",
    holidays_header: "🎌 Hari libur mendatang",
    ramadan_header: "🌙 Ramadan hari ini",
    title: "⏰ Pengingat Harian",
    description: "Channel ini akan menerima ucapan hari libur nasional, pengingat sahur dan berbuka, serta pengingat jam kerja (waktu WIB).",
    no_reminders: "Tidak ada pengingat hari ini. Selamat libur!",
};

static JP: Locale = Locale {
    sahoor_label: "🌙 **サフールの時間です！** 夜明け前に起きて食事をしましょう。",
    sahoor_note: "イムサークは {imsak} です。今日の断食が順調でありますように。",
    iftar_label: "🌇 **断食明けの時間です！**",
    iftar_note: "イフタールは {time} です。どうぞ召し上がれ！",
    work_ramadan_body: "本日のラマダン勤務時間: {start} - {end}",
    work_body: "本日の勤務時間: {start} - {end}",
    daily_header: "📋 今日のリマインダー",
    standup: "デイリースタンドアップ",
    standup_ramadan: "デイリースタンドアップ（ラマダン時間）",
    lunch: "昼休み",
    love_note: "水分補給を忘れずに、体を大切にね 💙",
    friday_prayer: "金曜礼拝の休憩",
    holidays_header: "🎌 今後の祝日",
    ramadan_header: "🌙 今日のラマダン",
    title: "⏰ デイリーリマインダー",
    description: "このチャンネルには祝日のあいさつ、ラマダンのサフールとイフタールの通知、勤務開始・終了のリマインダーが届きます（ジャカルタ時間）。",
    no_reminders: "今日のリマインダーはありません。よい休日を！",
};

static KR: Locale = Locale {
    sahoor_label: "🌙 **사후르 시간입니다!** 새벽 전에 일어나 식사하세요.",
    sahoor_note: "임삭은 {imsak} 입니다. 오늘 금식이 순조롭길 바랍니다.",
    iftar_label: "🌇 **금식을 마칠 시간입니다!**",
    iftar_note: "이프타르는 {time} 입니다. 맛있게 드세요!",
    work_ramadan_body: "오늘의 라마단 근무 시간: {start} - {end}",
    work_body: "오늘의 근무 시간: {start} - {end}",
    daily_header: "📋 오늘의 알림",
    standup: "데일리 스탠드업",
    standup_ramadan: "데일리 스탠드업 (라마단 일정)",
    lunch: "점심시간",
    love_note: "물 자주 마시고 건강 챙기세요 💙",
    friday_prayer: "금요 예배 시간",
    holidays_header: "🎌 다가오는 공휴일",
    ramadan_header: "🌙 오늘의 라마단",
    title: "⏰ 데일리 알림",
    description: "이 채널에서는 국경일 인사, 라마단 사후르와 이프타르 알림, 업무 시작/종료 알림을 받게 됩니다 (자카르타 시간).",
    no_reminders: "오늘은 알림이 없습니다. 즐거운 휴일 보내세요!",
};

static ZH: Locale = Locale {
    sahoor_label: "🌙 **封斋饭时间到了！** 请在黎明前起床用餐。",
    sahoor_note: "伊姆萨克时间为 {imsak}。祝今天斋戒顺利。",
    iftar_label: "🌇 **开斋时间到了！**",
    iftar_note: "开斋时间为 {time}。请慢用！",
    work_ramadan_body: "今天的斋月工作时间：{start} - {end}",
    work_body: "今天的工作时间：{start} - {end}",
    daily_header: "📋 今日提醒",
    standup: "每日站会",
    standup_ramadan: "每日站会（斋月时间）",
    lunch: "午休",
    love_note: "记得多喝水，照顾好自己 💙",
    friday_prayer: "主麻礼拜休息",
    holidays_header: "🎌 即将到来的假日",
    ramadan_header: "🌙 今日斋月",
    title: "⏰ 每日提醒",
    description: "此频道将收到国家节日祝福、斋月封斋饭与开斋提醒，以及上下班提醒（雅加达时间）。",
    no_reminders: "今天没有提醒。祝你假期愉快！",
};
