pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-4 bg-gray-50 dark:bg-gray-900";
pub const HEADER: &str = "flex items-center justify-between mb-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const BUTTON_PRIMARY: &str = "mt-2 inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";

// Label editor
pub const LABEL_LIST: &str = "mt-4 space-y-2";
pub const LABEL_ITEM: &str = "flex items-center justify-between px-3 py-2 rounded-lg bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white";
pub const REMOVE_BUTTON: &str = "ml-2 text-sm text-gray-500 hover:text-red-500 disabled:opacity-40 disabled:cursor-not-allowed transition-colors duration-200";

// Wheel
pub const WHEEL_SECTION: &str = "relative flex justify-center";
pub const WHEEL_CANVAS: &str = "w-full max-w-[400px] h-auto";
pub const CONFETTI_CANVAS: &str = "absolute top-0 left-1/2 -translate-x-1/2 w-full max-w-[400px] h-auto pointer-events-none";
pub const SPIN_BUTTON: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";
pub const RESULT_BADGE: &str = "mt-3 px-6 py-4 rounded-xl bg-gradient-to-r from-orange-400 to-orange-600 border-2 border-orange-300 text-white font-bold text-xl shadow-lg";
