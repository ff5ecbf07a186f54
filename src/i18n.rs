use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_HYDRAULICS: &str = "main_menu.hydraulics";
    pub const MAIN_MENU_SYSTEM_CURVE: &str = "main_menu.system_curve";
    pub const MAIN_MENU_PUMP_SELECTION: &str = "main_menu.pump_selection";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const FLOW_UNIT_OPTIONS: &str = "unit.flow_options";
    pub const LENGTH_UNIT_OPTIONS: &str = "unit.length_options";
    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";

    pub const FLUID_OPTIONS: &str = "fluid.options";
    pub const PROMPT_FLUID: &str = "prompt.fluid";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_FLOW: &str = "prompt.flow";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_PIPE_LENGTH: &str = "prompt.pipe_length";
    pub const PROMPT_ROUGHNESS: &str = "prompt.roughness";
    pub const PROMPT_ELEVATION: &str = "prompt.elevation";
    pub const PROMPT_MINOR_K: &str = "prompt.minor_k";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_SUCTION_PRESSURE: &str = "prompt.suction_pressure";
    pub const PROMPT_SUCTION_STATIC: &str = "prompt.suction_static";
    pub const PROMPT_SUCTION_FRICTION: &str = "prompt.suction_friction";

    pub const HYDRAULICS_HEADING: &str = "hydraulics.heading";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION_FACTOR: &str = "result.friction_factor";
    pub const RESULT_MAJOR_LOSS: &str = "result.major_loss";
    pub const RESULT_MINOR_LOSS: &str = "result.minor_loss";
    pub const RESULT_TDH: &str = "result.tdh";
    pub const RESULT_HYDRAULIC_POWER: &str = "result.hydraulic_power";
    pub const RESULT_SHAFT_POWER: &str = "result.shaft_power";
    pub const RESULT_NPSHA: &str = "result.npsha";
    pub const WARNING_PREFIX: &str = "result.warning_prefix";

    pub const SYSTEM_CURVE_HEADING: &str = "system_curve.heading";
    pub const PROMPT_FLOW_MAX: &str = "prompt.flow_max";
    pub const SYSTEM_CURVE_TABLE_HEADER: &str = "system_curve.table_header";

    pub const PUMP_SELECTION_HEADING: &str = "pump_selection.heading";
    pub const PROMPT_CURVE_FLOWS: &str = "prompt.curve_flows";
    pub const PROMPT_CURVE_HEADS: &str = "prompt.curve_heads";
    pub const PROMPT_CURVE_NPSHR: &str = "prompt.curve_npshr";
    pub const RESULT_OPERATING_FLOW: &str = "result.operating_flow";
    pub const RESULT_OPERATING_HEAD: &str = "result.operating_head";
    pub const RESULT_OPERATING_NPSHR: &str = "result.operating_npshr";
    pub const RESULT_RESIDUAL: &str = "result.residual";
    pub const RESULT_CAVITATION_MARGIN: &str = "result.cavitation_margin";
    pub const CAVITATION_RISK: &str = "result.cavitation_risk";
    pub const CAVITATION_OK: &str = "result.cavitation_ok";
    pub const RESULT_BEP_FLOW: &str = "result.bep_flow";
    pub const NPSHR_MISSING: &str = "result.npshr_missing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_SAMPLES: &str = "settings.current_samples";
    pub const SETTINGS_PROMPT_SAMPLES: &str = "settings.prompt_samples";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
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
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pump Selection Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_HYDRAULICS => "2) 수리 계산 (손실/동력/NPSHa)",
        MAIN_MENU_SYSTEM_CURVE => "3) 시스템 곡선",
        MAIN_MENU_PUMP_SELECTION => "4) 펌프 선정 (운전점/공동현상)",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 유량  2) 길이/수두  3) 압력  4) 온도  5) 동력",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: m3/h, ft, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: gpm, m, psig): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        FLOW_UNIT_OPTIONS => "유량 단위: 1=m3/h 2=m3/s 3=GPM",
        LENGTH_UNIT_OPTIONS => "길이 단위: 1=m 2=ft 3=inch",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=Pa 2=kPa 3=bar 4=psig",
        TEMPERATURE_UNIT_OPTIONS => "온도 단위: 1=°C 2=°F",
        FLUID_OPTIONS => "유체: 1=물 2=경질유 3=해수 4=기타(물 기준 기본값)",
        PROMPT_FLUID => "유체 선택: ",
        PROMPT_TEMPERATURE => "온도 값: ",
        PROMPT_FLOW => "설계 유량 값: ",
        PROMPT_DIAMETER => "배관 내경 값: ",
        PROMPT_PIPE_LENGTH => "배관 길이 값: ",
        PROMPT_ROUGHNESS => "절대 거칠기 ε [m] (탄소강 약 0.000045): ",
        PROMPT_ELEVATION => "정적 양정 값 (내리막이면 음수): ",
        PROMPT_MINOR_K => "부차 손실 K 합계 (없으면 0): ",
        PROMPT_EFFICIENCY => "펌프 효율 (0~1, ex: 0.8): ",
        PROMPT_SUCTION_PRESSURE => "흡입 액면 압력 값: ",
        PROMPT_SUCTION_STATIC => "흡입 정수두 값 (액면이 아래면 음수): ",
        PROMPT_SUCTION_FRICTION => "흡입 배관 마찰손실 [m] (없으면 0): ",
        HYDRAULICS_HEADING => "\n-- 수리 계산 --",
        RESULT_VELOCITY => "유속:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FRICTION_FACTOR => "마찰계수:",
        RESULT_MAJOR_LOSS => "주손실:",
        RESULT_MINOR_LOSS => "부차손실:",
        RESULT_TDH => "전양정(TDH):",
        RESULT_HYDRAULIC_POWER => "수력 동력:",
        RESULT_SHAFT_POWER => "축동력:",
        RESULT_NPSHA => "NPSHa:",
        WARNING_PREFIX => "주의:",
        SYSTEM_CURVE_HEADING => "\n-- 시스템 곡선 --",
        PROMPT_FLOW_MAX => "스윕 상한 유량 값 (1.2배까지 스윕): ",
        SYSTEM_CURVE_TABLE_HEADER => "유량 [m3/h]   전양정 [m]",
        PUMP_SELECTION_HEADING => "\n-- 펌프 선정 --",
        PROMPT_CURVE_FLOWS => "펌프 곡선 유량 점들 (쉼표 구분, ex: 100,150,200): ",
        PROMPT_CURVE_HEADS => "펌프 곡선 양정 점들 (쉼표 구분): ",
        PROMPT_CURVE_NPSHR => "NPSHr 점들 (쉼표 구분, 없으면 엔터): ",
        RESULT_OPERATING_FLOW => "운전 유량:",
        RESULT_OPERATING_HEAD => "운전 양정:",
        RESULT_OPERATING_NPSHR => "운전점 NPSHr:",
        RESULT_RESIDUAL => "교점 잔차:",
        RESULT_CAVITATION_MARGIN => "공동현상 여유(NPSHa−NPSHr):",
        CAVITATION_RISK => "⚠ 공동현상 위험 – 여유가 3 m 미만입니다.",
        CAVITATION_OK => "공동현상 여유 양호.",
        RESULT_BEP_FLOW => "BEP 근사 유량(최대 양정 기준):",
        NPSHR_MISSING => "NPSHr 곡선이 없어 공동현상 여유를 계산하지 않았습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI  2) Metric  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_CURRENT_SAMPLES => "현재 시스템 곡선 표본 수:",
        SETTINGS_PROMPT_SAMPLES => "표본 수 (2 이상, 취소하려면 엔터): ",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pump Selection Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_HYDRAULICS => "2) Hydraulics (losses/power/NPSHa)",
        MAIN_MENU_SYSTEM_CURVE => "3) System Curve",
        MAIN_MENU_PUMP_SELECTION => "4) Pump Selection (operating point/cavitation)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Flow  2) Length/Head  3) Pressure  4) Temperature  5) Power",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: m3/h, ft, kPa): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: gpm, m, psig): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        FLOW_UNIT_OPTIONS => "Flow units: 1=m3/h 2=m3/s 3=GPM",
        LENGTH_UNIT_OPTIONS => "Length units: 1=m 2=ft 3=inch",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=Pa 2=kPa 3=bar 4=psig",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=°F",
        FLUID_OPTIONS => "Fluid: 1=Water 2=Light oil 3=Seawater 4=Other (water-like defaults)",
        PROMPT_FLUID => "Select fluid: ",
        PROMPT_TEMPERATURE => "Temperature value: ",
        PROMPT_FLOW => "Design flow value: ",
        PROMPT_DIAMETER => "Pipe inner diameter value: ",
        PROMPT_PIPE_LENGTH => "Pipe length value: ",
        PROMPT_ROUGHNESS => "Absolute roughness ε [m] (carbon steel ~0.000045): ",
        PROMPT_ELEVATION => "Static elevation value (negative if downhill): ",
        PROMPT_MINOR_K => "Minor-loss K sum (0 if none): ",
        PROMPT_EFFICIENCY => "Pump efficiency (0~1, ex: 0.8): ",
        PROMPT_SUCTION_PRESSURE => "Suction surface pressure value: ",
        PROMPT_SUCTION_STATIC => "Suction static head value (negative if lift): ",
        PROMPT_SUCTION_FRICTION => "Suction-line friction loss [m] (0 if none): ",
        HYDRAULICS_HEADING => "\n-- Hydraulics --",
        RESULT_VELOCITY => "Velocity:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FRICTION_FACTOR => "Friction factor:",
        RESULT_MAJOR_LOSS => "Major loss:",
        RESULT_MINOR_LOSS => "Minor loss:",
        RESULT_TDH => "Total dynamic head:",
        RESULT_HYDRAULIC_POWER => "Hydraulic power:",
        RESULT_SHAFT_POWER => "Shaft power:",
        RESULT_NPSHA => "NPSHa:",
        WARNING_PREFIX => "Note:",
        SYSTEM_CURVE_HEADING => "\n-- System Curve --",
        PROMPT_FLOW_MAX => "Sweep upper flow value (swept to 1.2x): ",
        SYSTEM_CURVE_TABLE_HEADER => "Flow [m3/h]   Head [m]",
        PUMP_SELECTION_HEADING => "\n-- Pump Selection --",
        PROMPT_CURVE_FLOWS => "Pump curve flow points (comma separated, ex: 100,150,200): ",
        PROMPT_CURVE_HEADS => "Pump curve head points (comma separated): ",
        PROMPT_CURVE_NPSHR => "NPSHr points (comma separated, enter to skip): ",
        RESULT_OPERATING_FLOW => "Operating flow:",
        RESULT_OPERATING_HEAD => "Operating head:",
        RESULT_OPERATING_NPSHR => "NPSHr at operating point:",
        RESULT_RESIDUAL => "Intersection residual:",
        RESULT_CAVITATION_MARGIN => "Cavitation margin (NPSHa−NPSHr):",
        CAVITATION_RISK => "⚠ Cavitation risk – margin below 3 m.",
        CAVITATION_OK => "Cavitation margin acceptable.",
        RESULT_BEP_FLOW => "Approx. BEP flow (max-head sample):",
        NPSHR_MISSING => "No NPSHr curve supplied; cavitation margin not evaluated.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI  2) Metric  3) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_CURRENT_SAMPLES => "Current system-curve sample count:",
        SETTINGS_PROMPT_SAMPLES => "Sample count (>= 2, enter to cancel): ",
        _ => return None,
    })
}
