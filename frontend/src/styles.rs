pub const APP: &str = "relative min-h-screen w-full overflow-hidden bg-gradient-to-b from-orange-50 to-amber-100 px-4 py-8";
pub const GLOW: &str = "pointer-events-none absolute -top-24 left-1/2 h-72 w-72 -translate-x-1/2 rounded-full bg-orange-300/40 blur-3xl";
pub const HEADER: &str = "relative mb-6 text-center";
pub const TEXT_H1: &str = "text-3xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-yellow-500 to-orange-600";
pub const SUBTITLE: &str = "mt-1 text-sm text-orange-800/70";
pub const WHEEL_WRAP: &str = "relative mx-auto mb-4 flex w-full max-w-[340px] items-center justify-center";
pub const MESSAGE: &str = "text-base font-medium text-gray-800";
pub const PRIZE_CARD: &str = "mt-3 px-6 py-3 rounded-xl bg-gradient-to-r from-orange-400 to-orange-600 text-white font-bold text-lg shadow-lg border-2 border-orange-300";
pub const SPIN_BUTTON: &str = "relative w-full px-8 py-4 rounded-full font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50";
pub const SPIN_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";
