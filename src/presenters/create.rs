//! 新增宠物表单页

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{ScreenHost, ScreenLifecycle};
use crate::models::PET_TYPE_OPTIONS;
use crate::storage::{NewPet, PetField, PetRecord, PetStore, StoreError};
use crate::utils::validation::{digits_only, optional_text, parse_age, require_text};

const SAVE_LABEL: &str = "Save Pet";
const SAVING_LABEL: &str = "Saving...";
const SAVE_FAILED_MESSAGE: &str = "Failed to save pet. Try again.";

/// 保存中标记，离开作用域（包括提交被宿主丢弃）时复位
struct SavingGuard<'a>(&'a AtomicBool);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// 表单草稿（未持久化）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetDraft {
    pub name: String,
    pub kind: String,
    /// 年龄输入框的原始文本（只含数字）
    pub age: String,
    pub breed: String,
}

impl PetDraft {
    /// 按表单顺序校验：名字、种类、年龄，第一个失败的字段生效
    fn to_new_pet(&self) -> Result<NewPet, StoreError> {
        let name = require_text(PetField::Name, &self.name)?;
        let kind = require_text(PetField::Type, &self.kind)?;
        let age = parse_age(&self.age)?;

        Ok(NewPet {
            name,
            kind,
            age,
            breed: optional_text(Some(self.breed.as_str())),
        })
    }
}

/// 表单渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePetView {
    pub draft: PetDraft,
    /// 种类下拉框选项 (标签, 值)
    pub type_options: &'static [(&'static str, &'static str)],
    pub save_label: &'static str,
    pub saving: bool,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已保存
    Saved(PetRecord),
    /// 字段校验失败，未提交
    Invalid(PetField),
    /// 保存失败，草稿保留
    Failed,
    /// 上一次提交尚未完成
    Busy,
}

/// 新增宠物 Presenter
pub struct CreatePetPresenter {
    store: Arc<PetStore>,
    host: Arc<dyn ScreenHost>,
    lifecycle: ScreenLifecycle,
    draft: RwLock<PetDraft>,
    saving: AtomicBool,
}

impl CreatePetPresenter {
    pub fn new(store: Arc<PetStore>, host: Arc<dyn ScreenHost>) -> Self {
        Self {
            store,
            host,
            lifecycle: ScreenLifecycle::new(),
            draft: RwLock::new(PetDraft::default()),
            saving: AtomicBool::new(false),
        }
    }

    pub fn lifecycle(&self) -> &ScreenLifecycle {
        &self.lifecycle
    }

    pub async fn set_name(&self, name: &str) {
        self.draft.write().await.name = name.to_string();
    }

    pub async fn set_kind(&self, kind: &str) {
        self.draft.write().await.kind = kind.to_string();
    }

    /// 年龄输入只保留数字
    pub async fn set_age(&self, age: &str) {
        self.draft.write().await.age = digits_only(age);
    }

    pub async fn set_breed(&self, breed: &str) {
        self.draft.write().await.breed = breed.to_string();
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    pub async fn view(&self) -> CreatePetView {
        let saving = self.is_saving();
        CreatePetView {
            draft: self.draft.read().await.clone(),
            type_options: PET_TYPE_OPTIONS,
            save_label: if saving { SAVING_LABEL } else { SAVE_LABEL },
            saving,
        }
    }

    /// 提交表单
    ///
    /// 校验失败弹出对应字段的提示；保存成功后返回上一页；
    /// 保存失败弹出错误提示并保留草稿以便重试。
    pub async fn submit(&self) -> SubmitOutcome {
        let input = match self.draft.read().await.to_new_pet() {
            Ok(input) => input,
            Err(e) => return self.reject(e),
        };

        if self.saving.swap(true, Ordering::SeqCst) {
            debug!("保存进行中，忽略重复提交");
            return SubmitOutcome::Busy;
        }
        let saving = SavingGuard(&self.saving);
        let result = self.store.create(input).await;
        drop(saving);

        let mounted = self.lifecycle.is_mounted();
        match result {
            Ok(pet) => {
                if mounted {
                    self.host.go_back();
                } else {
                    debug!("表单页已销毁，宠物 {} 已保存但不再返回", pet.id);
                }
                SubmitOutcome::Saved(pet)
            }
            Err(e @ StoreError::Validation { .. }) => self.reject(e),
            Err(e) => {
                warn!("保存宠物失败: {}", e);
                if mounted {
                    self.host.alert("Error", SAVE_FAILED_MESSAGE);
                }
                SubmitOutcome::Failed
            }
        }
    }

    /// 页面销毁
    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    fn reject(&self, error: StoreError) -> SubmitOutcome {
        let field = error.invalid_field().unwrap_or(PetField::Name);
        if self.lifecycle.is_mounted() {
            self.host.alert("Validation", &error.to_string());
        }
        SubmitOutcome::Invalid(field)
    }
}
