//! registry ドキュメント
//!
//! インストール可能なコンポーネント群を記述する registry.json の
//! モデル・ビルド・所在解決・読み込みを提供する。
//!
//! build（スキャン→生成）と add（読み込み→インストール）は同一プロセスで
//! 実行されることはなく、registry.json のファイルフォーマットだけで接続される。

pub mod builder;
pub mod loader;
pub mod model;
pub mod source;

pub use model::{ComponentFile, Registry, RegistryComponent, SourceInfo, SCHEMA_VERSION};
