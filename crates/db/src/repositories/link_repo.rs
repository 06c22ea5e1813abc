//! Repository for the `links` table.
//!
//! A link token is the sole credential for a build. Resolution answers two
//! questions at once: which build the token addresses and whether it grants
//! edit or view rights.

use pcshowdown_core::permission::Permission;
use pcshowdown_core::token;
use pcshowdown_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::StoreError;
use crate::models::link::{LinkRow, Links, ResolvedLink};

/// Token resolution and link-pair helpers.
pub struct LinkRepo;

impl LinkRepo {
    /// Resolve a token to its build and permission.
    ///
    /// Fails with [`StoreError::NotFound`] if the token does not exist.
    pub async fn resolve(pool: &PgPool, token: &str) -> Result<ResolvedLink, StoreError> {
        let mut conn = pool.acquire().await?;
        Self::resolve_in(&mut conn, token)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                token: token.to_string(),
            })
    }

    /// Return the links the holder of `token` is allowed to see.
    ///
    /// An edit token yields itself plus its sibling view token. A view token
    /// yields only itself; `edit_id` stays empty.
    pub async fn link_pair(pool: &PgPool, token: &str) -> Result<Links, StoreError> {
        let mut conn = pool.acquire().await?;
        let resolved = Self::resolve_in(&mut conn, token)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                token: token.to_string(),
            })?;
        Ok(Self::pair_for(&mut conn, &resolved, token).await?)
    }

    /// Look up a token on an existing connection. Returns `None` if unknown.
    ///
    /// Tokens that could never have been generated are rejected without a
    /// query.
    pub(crate) async fn resolve_in(
        conn: &mut PgConnection,
        token: &str,
    ) -> Result<Option<ResolvedLink>, sqlx::Error> {
        if !token::is_well_formed(token) {
            return Ok(None);
        }
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT build_id, permission::text AS permission FROM links WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await?;
        row.map(LinkRow::into_resolved)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    /// Build id addressed by `token`, only if the token grants edit rights.
    ///
    /// Unknown tokens and view tokens both yield `None`.
    pub(crate) async fn edit_build_id_in(
        conn: &mut PgConnection,
        token: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT build_id FROM links WHERE token = $1 AND permission = $2::link_permission",
        )
        .bind(token)
        .bind(Permission::Edit.as_str())
        .fetch_optional(&mut *conn)
        .await
    }

    /// Expand an already-resolved token into the links its holder may see.
    pub(crate) async fn pair_for(
        conn: &mut PgConnection,
        resolved: &ResolvedLink,
        token: &str,
    ) -> Result<Links, sqlx::Error> {
        match resolved.permission {
            Permission::Edit => {
                // (build_id, permission) is unique, so at most one row.
                let view_id = sqlx::query_scalar::<_, String>(
                    "SELECT token FROM links
                     WHERE build_id = $1 AND permission = $2::link_permission
                     LIMIT 1",
                )
                .bind(resolved.build_id)
                .bind(Permission::View.as_str())
                .fetch_one(&mut *conn)
                .await?;
                Ok(Links {
                    edit_id: token.to_string(),
                    view_id,
                })
            }
            Permission::View => Ok(Links {
                edit_id: String::new(),
                view_id: token.to_string(),
            }),
        }
    }

    /// Mint and insert the edit/view pair for a freshly inserted build.
    ///
    /// Must run inside the transaction that inserted the build.
    pub(crate) async fn create_pair(
        conn: &mut PgConnection,
        build_id: DbId,
    ) -> Result<Links, sqlx::Error> {
        let links = Links {
            edit_id: token::generate_token(),
            view_id: token::generate_token(),
        };
        sqlx::query(
            "INSERT INTO links (token, permission, build_id)
             VALUES ($1, $3::link_permission, $5), ($2, $4::link_permission, $5)",
        )
        .bind(&links.edit_id)
        .bind(&links.view_id)
        .bind(Permission::Edit.as_str())
        .bind(Permission::View.as_str())
        .bind(build_id)
        .execute(&mut *conn)
        .await?;
        Ok(links)
    }
}
