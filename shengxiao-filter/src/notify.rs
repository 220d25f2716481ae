pub const MSG_CLEARED: &str = "已清空条件";
pub const MSG_SAVED: &str = "筛选条件已保存";
pub const MSG_LOADED: &str = "筛选条件已加载";
pub const MSG_NOTHING_SAVED: &str = "暂无保存的条件";
pub const MSG_SAVE_FAILED: &str = "保存失败";
pub const MSG_LOAD_FAILED: &str = "加载失败";

/// Retour visuel vers l'utilisateur. Jamais attendu, jamais consulté.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}
