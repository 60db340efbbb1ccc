//! TrackEd - 学校教务管理后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建，管理 院系 → 年级 → 班级 → 科目/学生 的层级数据，
//! 以及考勤与成绩录入。
//!
//! # 架构
//! - `cache`: 身份缓存（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `navigation`: 前端层级导航状态与数据快照
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
