use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const QUANTITY_PRESSURE: &str = "quantity.pressure";
    pub const QUANTITY_VOLUME: &str = "quantity.volume";
    pub const QUANTITY_MOLES: &str = "quantity.moles";
    pub const QUANTITY_TEMPERATURE: &str = "quantity.temperature";

    pub const FIELD_PRESSURE: &str = "field.pressure";
    pub const FIELD_VOLUME: &str = "field.volume";
    pub const FIELD_MOLES: &str = "field.moles";
    pub const FIELD_TEMPERATURE: &str = "field.temperature";

    pub const FORM_CHOOSE_TARGET: &str = "form.choose_target";
    pub const FORM_CALCULATE: &str = "form.calculate";
    pub const FORM_CLEAR: &str = "form.clear";
    pub const FORM_INVALID_INPUT: &str = "form.invalid_input";
    pub const FORM_ABOUT: &str = "form.about";
    pub const FORM_ABOUT_TOOLTIP: &str = "form.about_tooltip";

    pub const MENU_HEADING: &str = "menu.heading";
    pub const MENU_TARGET_OPTIONS: &str = "menu.target_options";
    pub const MENU_AFTER_RESULT: &str = "menu.after_result";
    pub const MENU_RESET_DONE: &str = "menu.reset_done";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const RESULT_LABEL: &str = "result.label";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator {
    /// 언어 코드(en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 언어팩에서만 키를 조회한다.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 언어팩 → 내장 문자열 → 영어 순으로 번역을 가져온다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]").to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 가져온다.
    pub fn t_with(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 중첩 키.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Ideal Gas Law Calculator",
        QUANTITY_PRESSURE => "Pressure",
        QUANTITY_VOLUME => "Volume",
        QUANTITY_MOLES => "Moles",
        QUANTITY_TEMPERATURE => "Temperature",
        FIELD_PRESSURE => "Pressure (atm):",
        FIELD_VOLUME => "Volume (liters):",
        FIELD_MOLES => "Moles:",
        FIELD_TEMPERATURE => "Temperature (Kelvin):",
        FORM_CHOOSE_TARGET => "Choose what property to calculate:",
        FORM_CALCULATE => "Calculate",
        FORM_CLEAR => "Clear",
        FORM_INVALID_INPUT => "Invalid/Missing input! Please enter valid values.",
        FORM_ABOUT => "About",
        FORM_ABOUT_TOOLTIP => "Solves PV = nRT for one unknown.\nR = 0.0821 atm·L/(mol·K); units: atm, L, mol, K.",
        MENU_HEADING => "\n=== Ideal Gas Law Calculator ===",
        MENU_TARGET_OPTIONS => "1) Pressure  2) Volume  3) Moles  4) Temperature  0) Exit",
        MENU_AFTER_RESULT => "c) Calculate again  r) Reset  t) Change property  0) Exit",
        MENU_RESET_DONE => "All fields cleared.",
        PROMPT_SELECT => "Select: ",
        PROMPT_VALUE => "{quantity} [{unit}]: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        RESULT_LABEL => "Result:",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "이상기체 법칙 계산기",
        QUANTITY_PRESSURE => "압력",
        QUANTITY_VOLUME => "부피",
        QUANTITY_MOLES => "몰수",
        QUANTITY_TEMPERATURE => "온도",
        FIELD_PRESSURE => "압력 (atm):",
        FIELD_VOLUME => "부피 (L):",
        FIELD_MOLES => "몰수 (mol):",
        FIELD_TEMPERATURE => "온도 (K):",
        FORM_CHOOSE_TARGET => "계산할 물리량 선택:",
        FORM_CALCULATE => "계산",
        FORM_CLEAR => "지우기",
        FORM_INVALID_INPUT => "입력값이 잘못되었거나 비어 있습니다. 올바른 값을 입력하세요.",
        FORM_ABOUT => "정보",
        FORM_ABOUT_TOOLTIP => "PV = nRT 에서 미지수 하나를 계산합니다.\nR = 0.0821 atm·L/(mol·K), 단위: atm, L, mol, K.",
        MENU_HEADING => "\n=== 이상기체 법칙 계산기 ===",
        MENU_TARGET_OPTIONS => "1) 압력  2) 부피  3) 몰수  4) 온도  0) 종료",
        MENU_AFTER_RESULT => "c) 다시 계산  r) 초기화  t) 물리량 변경  0) 종료",
        MENU_RESET_DONE => "모든 입력을 지웠습니다.",
        PROMPT_SELECT => "선택: ",
        PROMPT_VALUE => "{quantity} [{unit}]: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        RESULT_LABEL => "계산 결과:",
        _ => return None,
    })
}
