//! Snapshot tests for the notation serializer and the treeviz formatter over the samples

use kexpr::kexpr::formats::{to_treeviz_str, NotationOptions, Serializer};
use kexpr::kexpr::processor::samples::KexprSources;
use kexpr::serialize_document;

#[test]
fn test_services_notation() {
    let doc = KexprSources::get_document("060-services.kx").unwrap();
    insta::assert_snapshot!(serialize_document(&doc), @r###"
    web   -->   port=8080 host="example.org" tags=[edge public ] ;
    {
        api   -->   port=9000 replicas=3 ;
        {
            db   -->   port=5432 engine=postgres ;
            cache   -->   port=6379 engine=redis ttl=300 ;
        }
    }
    worker   -->   queue="jobs" concurrency=4 ;
    {
        db   -->   port=5433 engine=postgres role=replica ;
    }
    "###);
}

#[test]
fn test_comments_are_dropped_from_notation() {
    let doc = KexprSources::get_document("040-comments.kx").unwrap();
    insta::assert_snapshot!(serialize_document(&doc), @r###"
    first   -->   a=1 ;
    second   -->   b=2 ;
    "###);
}

#[test]
fn test_lists_notation() {
    let doc = KexprSources::get_document("050-lists.kx").unwrap();
    insta::assert_snapshot!(serialize_document(&doc), @r###"
    ports   -->   values=[80 443 8080 ] ;
    tags   -->   values=[edge public "load balancer" ] ;
    none   -->   values=[] ;
    "###);
}

#[test]
fn test_nested_groups_with_two_space_indent() {
    let doc = KexprSources::get_document("030-nested-groups.kx").unwrap();
    let serializer = Serializer::with_options(NotationOptions {
        indent_string: "  ".to_string(),
    });
    insta::assert_snapshot!(serializer.serialize_document(&doc), @r###"
    root   -->   ;
    {
      child   -->   depth=1 ;
      {
        grandchild   -->   depth=2 ;
        {
          leaf   -->   depth=3 ;
        }
      }
      sibling   -->   depth=1 ;
    }
    tail   -->   ;
    "###);
}

#[test]
fn test_services_treeviz() {
    let doc = KexprSources::get_document("060-services.kx").unwrap();
    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    ├─ KeyExpression: web port=8080 host="example.or...
    ├─ CompoundGroup: 2 nodes
    │ ├─ KeyExpression: api port=9000 replicas=3
    │ └─ CompoundGroup: 2 nodes
    │   ├─ KeyExpression: db port=5432 engine=postgres
    │   └─ KeyExpression: cache port=6379 engine=redis t...
    ├─ KeyExpression: worker queue="jobs" concurrenc...
    └─ CompoundGroup: 1 nodes
      └─ KeyExpression: db port=5433 engine=postgres r...
    "###);
}
