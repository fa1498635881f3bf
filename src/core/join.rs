//! N-ary join of independent single-shot queries.
//!
//! A screen needs several unrelated reads, each a future yielding `Result<T>`.
//! [`QuerySet`] is implemented for tuples of such futures (up to twelve). Running
//! the set spawns every query on the current runtime, waits for all of them and
//! hands back the tuple of results in the same positions. The first failure ends
//! the wait with that failure; queries still running are left to finish on their
//! own and their results are dropped.

use crate::errors::{Error, Result};
use std::future::Future;
use tokio::task::JoinHandle;

/// A fixed group of queries that can be run concurrently and joined.
pub trait QuerySet {
    /// Tuple of every query's value, in declaration order.
    type Output;

    /// Spawns every query and waits for all of them, or for the first failure.
    fn run(self) -> impl Future<Output = Result<Self::Output>> + Send;
}

/// Runs `queries` and combines their values with `combine`.
///
/// `combine` is called exactly once when every query succeeded, and never
/// otherwise, so a partially filled result cannot exist.
pub async fn join_with<Q, F, B>(queries: Q, combine: F) -> Result<B>
where
    Q: QuerySet,
    F: FnOnce(Q::Output) -> B,
{
    let values = queries.run().await?;
    Ok(combine(values))
}

/// Runs `queries` and converts the tuple of values into `B`.
pub async fn join_into<Q, B>(queries: Q) -> Result<B>
where
    Q: QuerySet,
    B: From<Q::Output>,
{
    join_with(queries, B::from).await
}

async fn settle<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    handle.await.map_err(Error::from)?
}

macro_rules! impl_query_set {
    ($($query:ident: $fut:ident => $value:ident),+) => {
        impl<$($fut, $value),+> QuerySet for ($($fut,)+)
        where
            $(
                $fut: Future<Output = Result<$value>> + Send + 'static,
                $value: Send + 'static,
            )+
        {
            type Output = ($($value,)+);

            fn run(self) -> impl Future<Output = Result<Self::Output>> + Send {
                let ($($query,)+) = self;
                $(let $query = tokio::spawn($query);)+
                async move { tokio::try_join!($(settle($query)),+) }
            }
        }
    };
}

impl_query_set!(a: FA => A);
impl_query_set!(a: FA => A, b: FB => B);
impl_query_set!(a: FA => A, b: FB => B, c: FC => C);
impl_query_set!(a: FA => A, b: FB => B, c: FC => C, d: FD => D);
impl_query_set!(a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E);
impl_query_set!(a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G
);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G,
    h: FH => H
);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G,
    h: FH => H, i: FI => I
);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G,
    h: FH => H, i: FI => I, j: FJ => J
);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G,
    h: FH => H, i: FI => I, j: FJ => J, k: FK => K
);
impl_query_set!(
    a: FA => A, b: FB => B, c: FC => C, d: FD => D, e: FE => E, f: FF => F, g: FG => G,
    h: FH => H, i: FI => I, j: FJ => J, k: FK => K, l: FL => L
);
