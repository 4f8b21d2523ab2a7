//! The fixed illustrative batch loaded into a fresh store.
//!
//! Child rows name their parents by natural key (manufacturer name,
//! manufacturer plus model name, IMEI, ...). The loader resolves each key to
//! the identifier the store assigned when the parent was inserted.
use crate::database::entities::enums::{RepairStatus, ScreenType};

pub struct ManufacturerSeed {
    pub name: &'static str,
    pub country: &'static str,
}

pub struct NamedSeed {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct SeveritySeed {
    pub level_name: &'static str,
    pub score: i32,
}

pub struct ModelSeed {
    pub manufacturer: &'static str,
    pub model_name: &'static str,
    pub release_year: i32,
    pub screen_type: ScreenType,
    pub screen_size: f64,
}

pub struct TechnicianSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub specialization: &'static str,
    pub hire_date: &'static str,
}

pub struct DeviceSeed {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub imei: &'static str,
    pub production_date: &'static str,
}

/// `tag` identifies the defect for the image, diagnosis and repair rows below.
pub struct DefectSeed {
    pub tag: &'static str,
    pub device_imei: &'static str,
    pub defect_type: &'static str,
    pub location: &'static str,
    pub severity_score: i32,
    pub detection_date: &'static str,
    pub length_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub description: &'static str,
}

pub struct ImageSeed {
    pub defect: &'static str,
    pub image_path: &'static str,
    pub capture_date: &'static str,
    pub verification_date: Option<&'static str>,
}

pub struct DiagnosisSeed {
    pub defect: &'static str,
    pub technician_email: &'static str,
    pub diagnosis_date: &'static str,
    pub conclusion: &'static str,
    pub recommended_action: &'static str,
}

pub struct RepairSeed {
    pub defect: &'static str,
    pub technician_email: &'static str,
    pub start_date: &'static str,
    pub end_date: Option<&'static str>,
    pub repair_type: &'static str,
    pub cost: f64,
    pub status: RepairStatus,
    pub warranty_until: Option<&'static str>,
}

pub const MANUFACTURERS: &[ManufacturerSeed] = &[
    ManufacturerSeed {
        name: "Apple",
        country: "USA",
    },
    ManufacturerSeed {
        name: "Samsung",
        country: "South Korea",
    },
    ManufacturerSeed {
        name: "Xiaomi",
        country: "China",
    },
    ManufacturerSeed {
        name: "Huawei",
        country: "China",
    },
    ManufacturerSeed {
        name: "OnePlus",
        country: "China",
    },
];

pub const DEFECT_TYPES: &[NamedSeed] = &[
    NamedSeed {
        name: "Царапина",
        description: "Поверхностное повреждение защитного стекла",
    },
    NamedSeed {
        name: "Скол",
        description: "Локальное повреждение края экрана",
    },
    NamedSeed {
        name: "Трещина",
        description: "Линейное повреждение экрана",
    },
    NamedSeed {
        name: "Паутина",
        description: "Множественные радиальные трещины",
    },
    NamedSeed {
        name: "Пятно",
        description: "Повреждение дисплея под стеклом",
    },
];

pub const DEFECT_LOCATIONS: &[NamedSeed] = &[
    NamedSeed {
        name: "Верхний край",
        description: "Верхняя часть экрана",
    },
    NamedSeed {
        name: "Нижний край",
        description: "Нижняя часть экрана",
    },
    NamedSeed {
        name: "Левый край",
        description: "Левая часть экрана",
    },
    NamedSeed {
        name: "Правый край",
        description: "Правая часть экрана",
    },
    NamedSeed {
        name: "Центр",
        description: "Центральная часть экрана",
    },
    NamedSeed {
        name: "Угол",
        description: "Один из углов экрана",
    },
];

pub const SEVERITY_LEVELS: &[SeveritySeed] = &[
    SeveritySeed {
        level_name: "Минимальный",
        score: 1,
    },
    SeveritySeed {
        level_name: "Незначительный",
        score: 2,
    },
    SeveritySeed {
        level_name: "Умеренный",
        score: 3,
    },
    SeveritySeed {
        level_name: "Серьезный",
        score: 4,
    },
    SeveritySeed {
        level_name: "Критический",
        score: 5,
    },
];

pub const MODELS: &[ModelSeed] = &[
    ModelSeed {
        manufacturer: "Apple",
        model_name: "iPhone 13",
        release_year: 2021,
        screen_type: ScreenType::Oled,
        screen_size: 6.1,
    },
    ModelSeed {
        manufacturer: "Apple",
        model_name: "iPhone SE",
        release_year: 2022,
        screen_type: ScreenType::Lcd,
        screen_size: 4.7,
    },
    ModelSeed {
        manufacturer: "Samsung",
        model_name: "Galaxy S22",
        release_year: 2022,
        screen_type: ScreenType::Amoled,
        screen_size: 6.1,
    },
    ModelSeed {
        manufacturer: "Samsung",
        model_name: "Galaxy A53",
        release_year: 2022,
        screen_type: ScreenType::Amoled,
        screen_size: 6.5,
    },
    ModelSeed {
        manufacturer: "Xiaomi",
        model_name: "Redmi Note 11",
        release_year: 2022,
        screen_type: ScreenType::Amoled,
        screen_size: 6.43,
    },
    ModelSeed {
        manufacturer: "Huawei",
        model_name: "P50 Pro",
        release_year: 2021,
        screen_type: ScreenType::Oled,
        screen_size: 6.6,
    },
    ModelSeed {
        manufacturer: "OnePlus",
        model_name: "10 Pro",
        release_year: 2022,
        screen_type: ScreenType::Amoled,
        screen_size: 6.7,
    },
];

pub const TECHNICIANS: &[TechnicianSeed] = &[
    TechnicianSeed {
        name: "Иванов Алексей",
        email: "ivanov@service.com",
        phone: "+79161234567",
        specialization: "Экраны",
        hire_date: "2020-05-15",
    },
    TechnicianSeed {
        name: "Петрова Мария",
        email: "petrova@service.com",
        phone: "+79167654321",
        specialization: "Корпуса",
        hire_date: "2021-02-10",
    },
    TechnicianSeed {
        name: "Сидоров Дмитрий",
        email: "sidorov@service.com",
        phone: "+79169998877",
        specialization: "Диагностика",
        hire_date: "2019-11-23",
    },
];

pub const DEVICES: &[DeviceSeed] = &[
    DeviceSeed {
        manufacturer: "Apple",
        model: "iPhone 13",
        imei: "354678901234567",
        production_date: "2021-09-01",
    },
    DeviceSeed {
        manufacturer: "Samsung",
        model: "Galaxy S22",
        imei: "456789012345678",
        production_date: "2022-03-15",
    },
    DeviceSeed {
        manufacturer: "Xiaomi",
        model: "Redmi Note 11",
        imei: "567890123456789",
        production_date: "2022-05-20",
    },
    DeviceSeed {
        manufacturer: "OnePlus",
        model: "10 Pro",
        imei: "678901234567890",
        production_date: "2022-07-10",
    },
];

pub const DEFECTS: &[DefectSeed] = &[
    DefectSeed {
        tag: "iphone13-scratch",
        device_imei: "354678901234567",
        defect_type: "Царапина",
        location: "Центр",
        severity_score: 2,
        detection_date: "2022-10-15 09:30:00",
        length_mm: Some(15.2),
        width_mm: Some(0.1),
        description: "Длинная тонкая царапина",
    },
    DefectSeed {
        tag: "iphone13-chip",
        device_imei: "354678901234567",
        defect_type: "Скол",
        location: "Угол",
        severity_score: 3,
        detection_date: "2022-10-15 09:30:00",
        length_mm: Some(2.5),
        width_mm: Some(2.5),
        description: "Скол в левом нижнем углу",
    },
    DefectSeed {
        tag: "galaxy-s22-crack",
        device_imei: "456789012345678",
        defect_type: "Трещина",
        location: "Верхний край",
        severity_score: 4,
        detection_date: "2022-11-02 14:15:00",
        length_mm: Some(35.0),
        width_mm: Some(0.5),
        description: "Трещина от верха до центра",
    },
    DefectSeed {
        tag: "redmi-scratches",
        device_imei: "567890123456789",
        defect_type: "Царапина",
        location: "Левый край",
        severity_score: 1,
        detection_date: "2022-11-10 11:20:00",
        length_mm: Some(8.7),
        width_mm: Some(0.05),
        description: "Несколько мелких царапин",
    },
    DefectSeed {
        tag: "oneplus-spiderweb",
        device_imei: "678901234567890",
        defect_type: "Паутина",
        location: "Нижний край",
        severity_score: 5,
        detection_date: "2022-11-25 16:45:00",
        length_mm: None,
        width_mm: None,
        description: "Паутина по всему экрану",
    },
];

pub const IMAGES: &[ImageSeed] = &[
    ImageSeed {
        defect: "iphone13-scratch",
        image_path: "images/defect_1_1.jpg",
        capture_date: "2022-10-15 09:32:00",
        verification_date: Some("2022-10-15 10:15:00"),
    },
    ImageSeed {
        defect: "iphone13-scratch",
        image_path: "images/defect_1_2.jpg",
        capture_date: "2022-10-15 09:33:00",
        verification_date: Some("2022-10-15 10:15:00"),
    },
    ImageSeed {
        defect: "iphone13-chip",
        image_path: "images/defect_2_1.jpg",
        capture_date: "2022-11-02 14:20:00",
        verification_date: Some("2022-11-02 15:30:00"),
    },
    ImageSeed {
        defect: "galaxy-s22-crack",
        image_path: "images/defect_3_1.jpg",
        capture_date: "2022-11-10 11:25:00",
        verification_date: None,
    },
    ImageSeed {
        defect: "redmi-scratches",
        image_path: "images/defect_4_1.jpg",
        capture_date: "2022-11-25 16:50:00",
        verification_date: Some("2022-11-25 17:30:00"),
    },
];

pub const DIAGNOSES: &[DiagnosisSeed] = &[
    DiagnosisSeed {
        defect: "iphone13-scratch",
        technician_email: "ivanov@service.com",
        diagnosis_date: "2022-10-15 10:00:00",
        conclusion: "Поверхностная царапина, не влияет на функциональность",
        recommended_action: "Полировка экрана",
    },
    DiagnosisSeed {
        defect: "iphone13-chip",
        technician_email: "ivanov@service.com",
        diagnosis_date: "2022-10-15 10:05:00",
        conclusion: "Скол края экрана, возможны дальнейшие повреждения",
        recommended_action: "Замена защитного стекла",
    },
    DiagnosisSeed {
        defect: "galaxy-s22-crack",
        technician_email: "petrova@service.com",
        diagnosis_date: "2022-11-02 15:00:00",
        conclusion: "Сквозная трещина, требуется замена экрана",
        recommended_action: "Полная замена дисплея",
    },
    DiagnosisSeed {
        defect: "oneplus-spiderweb",
        technician_email: "sidorov@service.com",
        diagnosis_date: "2022-11-25 17:00:00",
        conclusion: "Множественные трещины, дисплей не функционирует",
        recommended_action: "Замена дисплейного модуля",
    },
];

pub const REPAIRS: &[RepairSeed] = &[
    RepairSeed {
        defect: "iphone13-scratch",
        technician_email: "ivanov@service.com",
        start_date: "2022-10-15 10:30:00",
        end_date: Some("2022-10-15 11:15:00"),
        repair_type: "Полировка",
        cost: 1500.0,
        status: RepairStatus::Completed,
        warranty_until: Some("2023-10-15"),
    },
    RepairSeed {
        defect: "galaxy-s22-crack",
        technician_email: "petrova@service.com",
        start_date: "2022-11-03 10:00:00",
        end_date: Some("2022-11-03 12:30:00"),
        repair_type: "Замена дисплея",
        cost: 12000.0,
        status: RepairStatus::Completed,
        warranty_until: Some("2023-11-03"),
    },
    RepairSeed {
        defect: "oneplus-spiderweb",
        technician_email: "ivanov@service.com",
        start_date: "2022-11-26 10:00:00",
        end_date: None,
        repair_type: "Замена дисплейного модуля",
        cost: 8500.0,
        status: RepairStatus::InProgress,
        warranty_until: None,
    },
];
