use crate::error::BotResult;

pub(crate) trait Updatable {
    fn add_phone(&mut self, phone: &str) -> BotResult<()>;
    fn remove_phone(&mut self, phone: &str);
    fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BotResult<()>;
    fn add_birthday(&mut self, birthday: &str) -> BotResult<()>;
}
