//! Language registry: single source of truth for all supported languages.
//!
//! Every plugin-facing language code maps to a display name (used when
//! building prompts) and to the code the GLM endpoint expects. The table is
//! static, initialized once behind an `OnceLock`, and never mutated.

use std::sync::OnceLock;

/// Sentinel source-language code instructing the orchestrator to run the
/// detector instead of trusting caller input.
pub const AUTO: &str = "auto";

/// One supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Plugin-facing code the host sends (e.g. "en", "zh-Hans", "auto")
    pub code: &'static str,

    /// Display name, as shown by the host and interpolated into prompts
    pub name: &'static str,

    /// Code the GLM endpoint expects for this language
    pub provider_code: &'static str,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    provider_code: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        code,
        name,
        provider_code,
    }
}

/// Supported languages in registration order ("auto" first).
///
/// Provider codes equal the plugin code except for the two Chinese variants,
/// which the endpoint knows as "zh" and "zh-tw".
const LANGUAGES: &[LanguageEntry] = &[
    lang("auto", "自动检测", "auto"),
    lang("zh-Hans", "简体中文", "zh"),
    lang("zh-Hant", "繁体中文", "zh-tw"),
    lang("en", "英语", "en"),
    lang("ja", "日语", "ja"),
    lang("ko", "韩语", "ko"),
    lang("fr", "法语", "fr"),
    lang("de", "德语", "de"),
    lang("es", "西班牙语", "es"),
    lang("it", "意大利语", "it"),
    lang("ru", "俄语", "ru"),
    lang("pt", "葡萄牙语", "pt"),
    lang("ar", "阿拉伯语", "ar"),
    lang("hi", "印地语", "hi"),
    lang("th", "泰语", "th"),
    lang("vi", "越南语", "vi"),
    lang("id", "印尼语", "id"),
    lang("ms", "马来语", "ms"),
    lang("tr", "土耳其语", "tr"),
    lang("nl", "荷兰语", "nl"),
    lang("pl", "波兰语", "pl"),
    lang("cs", "捷克语", "cs"),
    lang("sk", "斯洛伐克语", "sk"),
    lang("hu", "匈牙利语", "hu"),
    lang("ro", "罗马尼亚语", "ro"),
    lang("bg", "保加利亚语", "bg"),
    lang("hr", "克罗地亚语", "hr"),
    lang("sl", "斯洛文尼亚语", "sl"),
    lang("et", "爱沙尼亚语", "et"),
    lang("lv", "拉脱维亚语", "lv"),
    lang("lt", "立陶宛语", "lt"),
    lang("fi", "芬兰语", "fi"),
    lang("sv", "瑞典语", "sv"),
    lang("da", "丹麦语", "da"),
    lang("no", "挪威语", "no"),
    lang("is", "冰岛语", "is"),
    lang("el", "希腊语", "el"),
    lang("he", "希伯来语", "he"),
    lang("fa", "波斯语", "fa"),
    lang("ur", "乌尔都语", "ur"),
    lang("bn", "孟加拉语", "bn"),
    lang("ta", "泰米尔语", "ta"),
    lang("te", "泰卢固语", "te"),
    lang("ml", "马拉雅拉姆语", "ml"),
    lang("kn", "卡纳达语", "kn"),
    lang("gu", "古吉拉特语", "gu"),
    lang("pa", "旁遮普语", "pa"),
    lang("ne", "尼泊尔语", "ne"),
    lang("si", "僧伽罗语", "si"),
    lang("my", "缅甸语", "my"),
    lang("km", "高棉语", "km"),
    lang("lo", "老挝语", "lo"),
    lang("ka", "格鲁吉亚语", "ka"),
    lang("am", "阿姆哈拉语", "am"),
    lang("sw", "斯瓦希里语", "sw"),
    lang("zu", "祖鲁语", "zu"),
    lang("af", "南非荷兰语", "af"),
    lang("sq", "阿尔巴尼亚语", "sq"),
    lang("az", "阿塞拜疆语", "az"),
    lang("be", "白俄罗斯语", "be"),
    lang("bs", "波斯尼亚语", "bs"),
    lang("eu", "巴斯克语", "eu"),
    lang("gl", "加利西亚语", "gl"),
    lang("ga", "爱尔兰语", "ga"),
    lang("mk", "马其顿语", "mk"),
    lang("mt", "马耳他语", "mt"),
    lang("mn", "蒙古语", "mn"),
    lang("sr", "塞尔维亚语", "sr"),
    lang("uk", "乌克兰语", "uk"),
    lang("cy", "威尔士语", "cy"),
    lang("yi", "意第绪语", "yi"),
];

/// Read-only view over the language table.
///
/// Initialized lazily on first access; the underlying data is `'static`, so
/// sharing the registry across concurrent calls needs no locking.
pub struct LanguageRegistry {
    languages: &'static [LanguageEntry],
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
static ALL_CODES: OnceLock<Vec<&'static str>> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: LANGUAGES,
        })
    }

    /// Look up the full entry for a code.
    pub fn entry(&self, code: &str) -> Option<&'static LanguageEntry> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// Display name for a code, or the code itself when unknown.
    ///
    /// Never fails: an unknown code passes through unchanged so the caller
    /// can still render something.
    pub fn name_of<'a>(&self, code: &'a str) -> &'a str {
        match self.entry(code) {
            Some(entry) => entry.name,
            None => code,
        }
    }

    /// Provider-specific code for a code, or `None` when unsupported.
    pub fn provider_code_of(&self, code: &str) -> Option<&'static str> {
        self.entry(code).map(|l| l.provider_code)
    }

    /// Whether the code exists in the table.
    pub fn is_known(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// All codes in registration order, "auto" included.
    ///
    /// This is what the host uses to populate its language picker. The list
    /// is materialized once and shared, so every call returns the same slice.
    pub fn all_codes(&self) -> &'static [&'static str] {
        ALL_CODES.get_or_init(|| self.languages.iter().map(|l| l.code).collect())
    }
}
