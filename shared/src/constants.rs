pub const PRIZES_ENDPOINT: &str = "/api/prizes";
pub const STATUS_ENDPOINT: &str = "/api/me";
pub const SPIN_ENDPOINT: &str = "/api/spin";

/// Query parameter carrying the session token when the host platform does not inject one.
pub const INIT_DATA_PARAM: &str = "initData";

pub const WELCOME_MESSAGE: &str = "Добро пожаловать в колесо фортуны";
pub const ALREADY_SPUN_MESSAGE: &str = "Вы уже крутили колесо";
pub const STATUS_CHECK_ERROR: &str = "Ошибка проверки. Попробуйте позже.";
pub const MISSING_IDENTITY_MESSAGE: &str = "Откройте приложение через Telegram";
pub const SPINNING_MESSAGE: &str = "Колесо вращается...";
pub const COMPLETED_MESSAGE: &str = "Спасибо за участие";
pub const SPIN_ERROR: &str = "Ошибка. Попробуйте снова.";

pub const LOCKED_CAPTION: &str = "Уже участвовали";
pub const SPINNING_CAPTION: &str = "Крутим...";
pub const SPIN_CAPTION: &str = "Крутить колесо фортуны";

pub const LABEL_MAX_LINE_LEN: usize = 14;
pub const LABEL_MAX_LINES: usize = 3;
pub const LONG_LABEL_CHARS: usize = 18;
