//! 会话
//!
//! [`Medu`] 独占一个设备句柄和一组契约限值。每个操作都经过同一个
//! 校验-转发流程：
//!
//! 1. 句柄必须存在
//! 2. 参数通过契约检查（失败时不联系设备）
//! 3. 把规范化后的参数转发给设备句柄
//! 4. 失败时记录 `[operation] message` 日志并返回 [`CallError`]
//!
//! 会话不跟踪设备的连接状态或运动模式，这些由 SDK 自己负责。

use crate::error::{CallError, CallResult};
use medu_driver::{DriverError, Manipulator};
use medu_types::{ContractLimits, ValidationError};
use tracing::{debug, error, info, warn};

/// MEdu 会话
///
/// 通过 [`connect`](crate::connect) 或 [`MeduBuilder`](crate::MeduBuilder) 创建。
/// `disconnect` 之后句柄被释放，后续调用都返回 [`CallError::NoHandle`]。
///
/// Drop 时如果仍持有句柄会自动断开连接（失败只记录日志）。
pub struct Medu<M: Manipulator> {
    handle: Option<M>,
    limits: ContractLimits,
}

impl<M: Manipulator> Medu<M> {
    /// 用已连接的句柄创建会话
    ///
    /// 不会调用 `connect`/`get_control`，适用于调用方自己完成握手的场景。
    pub fn from_handle(handle: M, limits: ContractLimits) -> Self {
        Self {
            handle: Some(handle),
            limits,
        }
    }

    /// 创建不持有句柄的会话
    ///
    /// 所有操作都会以 [`CallError::NoHandle`] 失败。
    pub fn detached(limits: ContractLimits) -> Self {
        Self {
            handle: None,
            limits,
        }
    }

    /// 是否持有句柄
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// 借用句柄（用于检查设备状态，绕过契约检查）
    pub fn handle(&self) -> Option<&M> {
        self.handle.as_ref()
    }

    /// 可变借用句柄
    pub fn handle_mut(&mut self) -> Option<&mut M> {
        self.handle.as_mut()
    }

    /// 取出句柄，会话变为无句柄状态（不断开连接）
    pub fn into_handle(mut self) -> Option<M> {
        self.handle.take()
    }

    /// 当前契约限值
    pub fn limits(&self) -> &ContractLimits {
        &self.limits
    }

    /// 断开连接
    ///
    /// 无论设备是否报错，句柄都会被释放。
    pub fn disconnect(&mut self) -> CallResult<()> {
        const OPERATION: &str = "disconnect";

        let Some(mut handle) = self.handle.take() else {
            return Err(reject_no_handle(OPERATION));
        };

        debug!("[{}] forwarding to device", OPERATION);
        match handle.disconnect() {
            Ok(()) => {
                info!("[{}] disconnected", OPERATION);
                Ok(())
            },
            Err(source) => Err(fail(OPERATION, source)),
        }
    }

    /// 校验并转发一次设备调用
    ///
    /// `check` 把原始参数校验并规范化为 `V`，`forward` 用 `V` 调用设备。
    pub(crate) fn call<V, T>(
        &mut self,
        operation: &'static str,
        check: impl FnOnce(&ContractLimits) -> Result<V, ValidationError>,
        forward: impl FnOnce(&mut M, V) -> Result<T, DriverError>,
    ) -> CallResult<T> {
        let Some(handle) = self.handle.as_mut() else {
            return Err(reject_no_handle(operation));
        };

        let args = check(&self.limits).map_err(|source| reject(operation, source))?;

        debug!("[{}] forwarding to device", operation);
        forward(handle, args).map_err(|source| fail(operation, source))
    }
}

impl<M: Manipulator> Drop for Medu<M> {
    #[allow(clippy::collapsible_if)]
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            if let Err(e) = handle.disconnect() {
                warn!("[disconnect] failed while dropping session: {}", e);
            }
        }
    }
}

impl<M: Manipulator> std::fmt::Debug for Medu<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Medu")
            .field("has_handle", &self.has_handle())
            .field("limits", &self.limits)
            .finish()
    }
}

pub(crate) fn reject_no_handle(operation: &'static str) -> CallError {
    let err = CallError::NoHandle { operation };
    warn!("{}", err);
    err
}

pub(crate) fn reject(operation: &'static str, source: ValidationError) -> CallError {
    let err = CallError::Precondition { operation, source };
    warn!("{}", err);
    err
}

pub(crate) fn fail(operation: &'static str, source: DriverError) -> CallError {
    let err = CallError::Execution { operation, source };
    error!("{}", err);
    err
}
