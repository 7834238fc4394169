mod i18n;
mod notifications;
