use crate::Locale;

use std::collections::HashMap;
use std::sync::LazyLock;

const RU: &[(&str, &str)] = &[
    // Navigation
    ("features", "Возможности"),
    ("pricing", "Тарифы"),
    ("about", "О нас"),
    ("contact", "Контакты"),
    ("login", "Войти"),
    ("getStarted", "Начать бесплатно"),
    ("cookiePolicy", "Политика cookie"),
    ("constructor", "Конструктор чата"),
    ("notFound", "Страница не найдена"),
    ("loading", "Загрузка..."),
    // Auth
    ("signIn", "Войти"),
    ("signUp", "Регистрация"),
    ("email", "Email"),
    ("password", "Пароль"),
    ("confirmPassword", "Подтвердите пароль"),
    ("fullName", "Полное имя"),
    ("company", "Компания"),
    ("logout", "Выйти"),
    ("loginSuccess", "Успешный вход!"),
    ("loginFailed", "Неверный email или пароль"),
    ("registerSuccess", "Регистрация прошла успешно!"),
    ("registerFailed", "Не удалось зарегистрироваться"),
    ("authError", "Ошибка авторизации/регистрации"),
    ("networkError", "Сервер недоступен, попробуйте позже"),
    ("sessionExpired", "Сессия истекла, войдите снова"),
    ("profileRefreshFailed", "Не удалось обновить профиль, выполнен выход"),
    ("loggedOut", "Вы вышли из системы"),
    ("notSignedIn", "Вы не вошли в систему"),
    // Validation
    ("emailRequired", "Введите email"),
    ("emailInvalid", "Введите корректный email"),
    ("passwordRequired", "Введите пароль"),
    ("passwordTooShort", "Пароль должен содержать не менее 6 символов"),
    ("fullNameRequired", "Введите полное имя"),
    ("passwordsMismatch", "Пароли не совпадают"),
    // Dashboard
    ("dashboard", "Панель управления"),
    ("overview", "Обзор"),
    ("chats", "Чаты"),
    ("clients", "Клиенты"),
    ("deals", "Сделки"),
    ("tasks", "Задачи"),
    ("analytics", "Аналитика"),
    ("settings", "Настройки"),
    ("profile", "Профиль"),
];

const EN: &[(&str, &str)] = &[
    // Navigation
    ("features", "Features"),
    ("pricing", "Pricing"),
    ("about", "About"),
    ("contact", "Contact"),
    ("login", "Login"),
    ("getStarted", "Get Started Free"),
    ("cookiePolicy", "Cookie Policy"),
    ("constructor", "Chat Builder"),
    ("notFound", "Page not found"),
    ("loading", "Loading..."),
    // Auth
    ("signIn", "Sign In"),
    ("signUp", "Sign Up"),
    ("email", "Email"),
    ("password", "Password"),
    ("confirmPassword", "Confirm Password"),
    ("fullName", "Full Name"),
    ("company", "Company"),
    ("logout", "Logout"),
    ("loginSuccess", "Signed in successfully!"),
    ("loginFailed", "Invalid email or password"),
    ("registerSuccess", "Registration successful!"),
    ("registerFailed", "Registration failed"),
    ("authError", "Authentication error"),
    ("networkError", "Server unavailable, please try again later"),
    ("sessionExpired", "Your session has expired, please sign in again"),
    ("profileRefreshFailed", "Could not refresh your profile, signed out"),
    ("loggedOut", "You have been signed out"),
    ("notSignedIn", "You are not signed in"),
    // Validation
    ("emailRequired", "Email is required"),
    ("emailInvalid", "Enter a valid email"),
    ("passwordRequired", "Password is required"),
    ("passwordTooShort", "Password must be at least 6 characters"),
    ("fullNameRequired", "Full name is required"),
    ("passwordsMismatch", "Passwords do not match"),
    // Dashboard
    ("dashboard", "Dashboard"),
    ("overview", "Overview"),
    ("chats", "Chats"),
    ("clients", "Clients"),
    ("deals", "Deals"),
    ("tasks", "Tasks"),
    ("analytics", "Analytics"),
    ("settings", "Settings"),
    ("profile", "Profile"),
];

static RU_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| RU.iter().copied().collect());

static EN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN.iter().copied().collect());

pub(crate) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let table = match locale {
        Locale::Ru => &RU_TABLE,
        Locale::En => &EN_TABLE,
    };
    table.get(key).copied()
}
