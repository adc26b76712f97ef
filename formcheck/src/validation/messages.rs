//! Default failure messages.

pub const REQUIRED: &str = "Поле обязательно для заполнения";
pub const STRING: &str = "Поле должно быть строкой";
pub const NUMBER: &str = "Поле должно быть числом";
pub const EMAIL: &str = "Некорректный email";
pub const MIN: &str = "Минимальная длина не достигнута";
pub const MAX: &str = "Максимальная длина превышена";
pub const MIN_NUMBER: &str = "Значение слишком маленькое";
pub const MAX_NUMBER: &str = "Значение слишком большое";
pub const PATTERN: &str = "Значение не соответствует шаблону";
pub const CONFIRM: &str = "Пароли не совпадают";
pub const ARRAY: &str = "Поле должно быть массивом";
pub const MIN_LENGTH: &str = "Слишком мало элементов";
pub const MAX_LENGTH: &str = "Слишком много элементов";
pub const CUSTOM: &str = "Некорректное значение";
/// Used when native validity fails without a message of its own.
pub const INVALID: &str = "Некорректное значение";
