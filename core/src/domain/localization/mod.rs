use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::entities::{CalculationMode, DietType, Disease, Region};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Name of the language as written in the prompt sent to the model.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::Ar => "Arabic",
            Language::En => "English",
        }
    }
}

/// UI strings for one language.
#[derive(Debug)]
pub struct Translations {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub generate_recipe: &'static str,
    pub history: &'static str,
    pub profile: &'static str,
    pub dietary_prefs: &'static str,
    pub diseases: &'static str,
    pub mode_free: &'static str,
    pub mode_calculated: &'static str,
    pub detecting: &'static str,
    pub no_ingredients: &'static str,
    pub substitutes: &'static str,
    pub save: &'static str,
    pub age: &'static str,
    pub weight: &'static str,
    pub height: &'static str,
    pub ingredients_found: &'static str,
    pub diabetes: &'static str,
    pub hypertension: &'static str,
    pub celiac: &'static str,
    pub none: &'static str,
    pub kitchen_prompt: &'static str,
    pub kitchen_example: &'static str,
    pub create_from_these: &'static str,
    pub or_use_camera: &'static str,
    pub scan_ingredients: &'static str,
    pub analyze_meal: &'static str,
    pub choose_meal: &'static str,
    pub option: &'static str,
    pub cancel_and_back: &'static str,
    pub region: &'static str,
    pub calculation_mode: &'static str,
    pub history_empty: &'static str,
    pub ingredients: &'static str,
    pub preparation: &'static str,
    pub health_report: &'static str,
    pub analysis_failed: &'static str,
    pub switch_language: &'static str,
}

pub static AR: Translations = Translations {
    app_name: "شيف العيلة",
    tagline: "حول مكوناتك إلى وجبات شهية بذكاء",
    generate_recipe: "ابتكار وصفة",
    history: "السجل",
    profile: "الملف الشخصي",
    dietary_prefs: "التفضيلات الغذائية",
    diseases: "الحالة الصحية",
    mode_free: "وجبات مفتوحة",
    mode_calculated: "وجبات محسوبة",
    detecting: "جاري التحضير...",
    no_ingredients: "لم يتم العثور على مكونات.",
    substitutes: "بدائل المكونات",
    save: "حفظ التغييرات",
    age: "العمر",
    weight: "الوزن (كجم)",
    height: "الطول (سم)",
    ingredients_found: "المكونات المكتشفة",
    diabetes: "السكري",
    hypertension: "الضغط",
    celiac: "حساسية القمح",
    none: "لا يوجد",
    kitchen_prompt: "ماذا يوجد في مطبخك الآن؟ (اكتب المكونات هنا)",
    kitchen_example: "مثال: بيض، طماطم، بصل، فلفل...",
    create_from_these: "ابتكار وصفات من هذه المكونات",
    or_use_camera: "أو استخدم الكاميرا",
    scan_ingredients: "تصوير المكونات",
    analyze_meal: "تحليل وجبة جاهزة",
    choose_meal: "اختر الوجبة التي تفضلها",
    option: "خيار",
    cancel_and_back: "إلغاء والعودة",
    region: "المنطقة (المطبخ المفضل)",
    calculation_mode: "طريقة الحساب",
    history_empty: "السجل فارغ حالياً",
    ingredients: "المكونات",
    preparation: "طريقة التحضير",
    health_report: "التقرير الصحي",
    analysis_failed: "عذراً، حدث خطأ. حاول مرة أخرى.",
    switch_language: "English",
};

pub static EN: Translations = Translations {
    app_name: "Family Chef",
    tagline: "Turn ingredients into smart meals",
    generate_recipe: "Create Recipe",
    history: "History",
    profile: "Profile",
    dietary_prefs: "Dietary Prefs",
    diseases: "Health Status",
    mode_free: "Free Mode",
    mode_calculated: "Calculated Mode",
    detecting: "Cooking up ideas...",
    no_ingredients: "No items found.",
    substitutes: "Substitutes",
    save: "Save Changes",
    age: "Age",
    weight: "Weight (kg)",
    height: "Height (cm)",
    ingredients_found: "Detected Items",
    diabetes: "Diabetes",
    hypertension: "Hypertension",
    celiac: "Celiac",
    none: "None",
    kitchen_prompt: "What is in your kitchen? (Type here)",
    kitchen_example: "Example: eggs, tomato, onion...",
    create_from_these: "Create recipes from these",
    or_use_camera: "OR use Camera",
    scan_ingredients: "Scan Ingredients",
    analyze_meal: "Analyze Ready Meal",
    choose_meal: "Choose your preferred meal",
    option: "Option",
    cancel_and_back: "Cancel and go back",
    region: "Kitchen Region",
    calculation_mode: "Calculation Mode",
    history_empty: "History is empty",
    ingredients: "Ingredients",
    preparation: "Preparation",
    health_report: "Health Report",
    analysis_failed: "Sorry, an error occurred.",
    switch_language: "عربي",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Ar => &AR,
        Language::En => &EN,
    }
}

impl Translations {
    pub fn disease(&self, disease: Disease) -> &'static str {
        match disease {
            Disease::Diabetes => self.diabetes,
            Disease::Hypertension => self.hypertension,
            Disease::Celiac => self.celiac,
            Disease::None => self.none,
        }
    }

    pub fn mode(&self, mode: CalculationMode) -> &'static str {
        match mode {
            CalculationMode::Free => self.mode_free,
            CalculationMode::Calculated => self.mode_calculated,
        }
    }
}

pub fn region_label(language: Language, region: Region) -> &'static str {
    match (language, region) {
        (Language::Ar, Region::International) => "عالمي",
        (Language::Ar, Region::Gulf) => "خليجي",
        (Language::Ar, Region::Egyptian) => "مصري",
        (Language::Ar, Region::Levant) => "شامي",
        (Language::Ar, Region::Maghreb) => "مغربي",
        (Language::En, Region::International) => "International",
        (Language::En, Region::Gulf) => "Gulf",
        (Language::En, Region::Egyptian) => "Egyptian",
        (Language::En, Region::Levant) => "Levant",
        (Language::En, Region::Maghreb) => "Maghreb",
    }
}

pub fn diet_label(language: Language, diet: DietType) -> &'static str {
    match (language, diet) {
        (Language::Ar, DietType::None) => "بدون نظام",
        (Language::Ar, DietType::Vegan) => "نباتي",
        (Language::Ar, DietType::Keto) => "كيتو",
        (Language::Ar, DietType::Paleo) => "باليو",
        (Language::Ar, DietType::GlutenFree) => "خالي من الجلوتين",
        (Language::En, DietType::None) => "No diet",
        (Language::En, DietType::Vegan) => "Vegan",
        (Language::En, DietType::Keto) => "Keto",
        (Language::En, DietType::Paleo) => "Paleo",
        (Language::En, DietType::GlutenFree) => "Gluten free",
    }
}
